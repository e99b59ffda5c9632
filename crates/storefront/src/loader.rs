//! Catalog loading from the storefront server.

use storefront_catalog::Product;

use crate::config::StorefrontConfig;
use crate::render::GridView;
use crate::state::ListingState;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Where the catalog comes from.
pub trait CatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, LoadError>>;
}

/// `GET {server_url}/products` returning a JSON array of products.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    products_url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(server_url: &str) -> Self {
        Self::with_client(server_url, reqwest::Client::new())
    }

    pub fn with_client(server_url: &str, client: reqwest::Client) -> Self {
        Self {
            products_url: format!("{}/products", server_url.trim_end_matches('/')),
            client,
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(&config.server_url)
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let resp = self
            .client
            .get(&self.products_url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Api(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_catalog(&body)
    }
}

/// Decode a `/products` response body.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Fetch once; on any failure log it and yield an empty catalog.
pub async fn fetch_catalog<S: CatalogSource>(source: &S) -> Vec<Product> {
    match source.fetch().await {
        Ok(products) => products,
        Err(err) => {
            tracing::error!(error = %err, "failed to load products");
            Vec::new()
        }
    }
}

/// Fetch the catalog into `state` and draw the first page.
pub async fn load_catalog<S: CatalogSource>(source: &S, state: &mut ListingState) -> GridView {
    let products = fetch_catalog(source).await;
    if products.is_empty() {
        return state.clear_catalog();
    }
    state.replace_catalog(products)
}
