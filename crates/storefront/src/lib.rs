//! `storefront`
//!
//! **Responsibility:** client side of the product listing page.
//!
//! This crate provides:
//! - Catalog loading over HTTP (`GET {server_url}/products`)
//! - The listing state (catalog, filters, sort, pagination, cart counter, drawer)
//! - The render pipeline (rows of product cards, empty state)
//! - Presentational toggles (mobile menus, dropdown, "more colors", drawer)
//! - A Leptos front end binding all of the above to the DOM (wasm32 only)

pub mod config;
pub mod loader;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{ConfigError, StorefrontConfig};
pub use loader::{CatalogSource, HttpCatalogSource, LoadError, fetch_catalog, load_catalog};
pub use render::{CardRow, DrawerEntry, GridView, ProductCard};
pub use state::ListingState;
pub use ui::{Menu, UiState};
