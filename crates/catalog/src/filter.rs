//! Filter engine: color, size and price-bucket selection.

use std::collections::BTreeSet;
use std::str::FromStr;

use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::product::Product;

/// Inclusive price bucket, written `"min-max"` in the filter markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(DomainError::validation("price bucket bounds must be numbers"));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "price bucket min ({min}) is above max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl FromStr for PriceRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| DomainError::validation(format!("price bucket '{s}' is not min-max")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| DomainError::validation(format!("price bucket '{s}': {e}")))
        };

        Self::new(parse(min)?, parse(max)?)
    }
}

/// Current state of the filter controls.
///
/// An empty dimension places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    colors: BTreeSet<String>,
    sizes: BTreeSet<String>,
    price_ranges: Vec<PriceRange>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    pub fn sizes(&self) -> &BTreeSet<String> {
        &self.sizes
    }

    pub fn price_ranges(&self) -> &[PriceRange] {
        &self.price_ranges
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.price_ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
        self.sizes.clear();
        self.price_ranges.clear();
    }

    /// Mirror a color checkbox's checked state.
    pub fn set_color(&mut self, color: impl Into<String>, checked: bool) {
        let color = color.into();
        if checked {
            self.colors.insert(color);
        } else {
            self.colors.remove(&color);
        }
    }

    /// Size buttons behave like a radio group that can be switched off:
    /// activating one deactivates the others, clicking the active one clears it.
    ///
    /// Returns whether the size is active afterwards.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        let was_active = self.sizes.contains(size);
        self.sizes.clear();
        if !was_active {
            self.sizes.insert(size.to_string());
        }
        !was_active
    }

    /// Mirror a price checkbox's checked state. Malformed buckets are rejected.
    pub fn set_price_range(&mut self, raw: &str, checked: bool) -> DomainResult<()> {
        let range: PriceRange = raw.parse()?;
        self.price_ranges.retain(|r| *r != range);
        if checked {
            self.price_ranges.push(range);
        }
        Ok(())
    }

    pub fn matches(&self, product: &Product) -> bool {
        let color_ok = self.colors.is_empty() || self.colors.contains(&product.color);
        let size_ok = self.sizes.is_empty() || product.size.iter().any(|s| self.sizes.contains(s));
        let price_ok = self.price_ranges.is_empty()
            || self
                .price_ranges
                .iter()
                .any(|r| r.contains(product.price.amount()));

        color_ok && size_ok && price_ok
    }

    /// Products passing the selection, in catalog order.
    pub fn apply(&self, catalog: &[Product]) -> Vec<Product> {
        let filtered: Vec<Product> = catalog
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        tracing::debug!(
            colors = self.colors.len(),
            sizes = self.sizes.len(),
            price_ranges = self.price_ranges.len(),
            matched = filtered.len(),
            total = catalog.len(),
            "filters applied"
        );

        filtered
    }
}
