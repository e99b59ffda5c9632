use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ValueObject};

/// A product record as served by the catalog endpoint.
///
/// Records carry no identifier; the storefront addresses them by position.
/// `parcelamento` is kept raw so that a record with the wrong arity still
/// loads and only fails when its installment text is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Money,
    pub image: String,
    pub date: String,
    pub color: String,
    #[serde(default)]
    pub size: Vec<String>,
    #[serde(default)]
    pub parcelamento: Vec<f64>,
}

impl Product {
    /// Parsed `date`, or `None` when the server sent something unparseable.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    /// Validated installment plan.
    pub fn installment(&self) -> DomainResult<Installment> {
        Installment::from_slice(&self.parcelamento)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.size.iter().any(|s| s == size)
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse the timestamp formats the catalog endpoint is known to emit.
///
/// Naive timestamps and bare dates are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Installment plan: `count` payments of `amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Installment {
    pub count: f64,
    pub amount: Money,
}

impl ValueObject for Installment {}

impl Installment {
    /// Build from the wire tuple `[count, amount]`.
    pub fn from_slice(raw: &[f64]) -> DomainResult<Self> {
        match raw {
            [count, amount] => Ok(Self {
                count: *count,
                amount: Money::new(*amount),
            }),
            other => Err(DomainError::formatting(format!(
                "installment plan must have exactly 2 elements, got {}",
                other.len()
            ))),
        }
    }
}

impl core::fmt::Display for Installment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x de R${}", self.count, self.amount)
    }
}

/// The full product list of the current page load.
///
/// Only ever replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct colors in first-seen order, for building the color filter.
    pub fn colors(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.color) {
                seen.push(product.color.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn product(name: &str, price: f64, color: &str, sizes: &[&str], date: &str) -> Product {
        Product {
            name: name.to_string(),
            price: Money::new(price),
            image: format!("img/{}.png", name.to_lowercase()),
            date: date.to_string(),
            color: color.to_string(),
            size: sizes.iter().map(|s| s.to_string()).collect(),
            parcelamento: vec![3.0, price / 3.0],
        }
    }
}
