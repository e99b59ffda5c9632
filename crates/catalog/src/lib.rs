//! Catalog domain module.
//!
//! Business rules of the product listing page, implemented purely as
//! deterministic logic (no IO, no HTTP, no DOM): the product record and its
//! display formatting, the filter engine, the sort engine and the grid layout.

pub mod filter;
pub mod format;
pub mod layout;
pub mod product;
pub mod sort;

pub use filter::{FilterSelection, PriceRange};
pub use format::{format_installment, format_price};
pub use layout::{GridLayout, show_load_more};
pub use product::{Catalog, Installment, Product};
pub use sort::{SortKey, sort_products};
