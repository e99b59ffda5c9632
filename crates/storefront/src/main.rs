//! `storefront-preview`: fetch the catalog and print the first listing page.
//!
//! Usage: `storefront-preview [sort-option]`, e.g. `storefront-preview mais-recente`.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use storefront::{HttpCatalogSource, ListingState, StorefrontConfig, load_catalog};

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    storefront_observability::tracing::init(&config.log_level, config.log_format);

    tracing::info!(url = %config.products_url(), "fetching catalog");

    let source = HttpCatalogSource::from_config(&config);
    let mut state = ListingState::new(&config, config.preview_viewport_px);
    let mut view = load_catalog(&source, &mut state).await;

    if let Some(option) = std::env::args().nth(1) {
        view = state.sort_by_option(&option);
    }

    print!("{view}");
    if state.show_load_more() {
        let hidden = state.active_products().len() - state.rendered_count();
        println!("[Carregar mais] ({hidden} more)");
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
