//! `storefront-core` — shared building blocks for the storefront crates.
//!
//! This crate contains **pure** primitives (no IO, no DOM, no HTTP).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
