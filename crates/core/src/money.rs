//! Monetary amounts as shown on the storefront.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A decimal amount in the storefront's display currency (BRL).
///
/// Amounts arrive from the catalog endpoint as JSON numbers, so the inner
/// value is an `f64`. No currency conversion happens anywhere.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

impl ValueObject for Money {}

impl Money {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Two fixed decimals with a comma as decimal separator (`19.5` → `19,50`).
    ///
    /// Exact half-cent ties round away from zero (`19.125` → `19,13`).
    pub fn to_display(&self) -> String {
        format!("{:.2}", round_cent_ties(self.0)).replacen('.', ",", 1)
    }
}

/// `{:.2}` already rounds to nearest on the exact binary value, but settles
/// exact ties half-to-even. A tie at the third decimal is only representable
/// when the amount is a multiple of 1/8, and then `amount * 100.0` is exact.
fn round_cent_ties(amount: f64) -> f64 {
    let cents = amount * 100.0;
    let exact_tie = (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5;
    if exact_tie { cents.round() / 100.0 } else { amount }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_display())
    }
}
