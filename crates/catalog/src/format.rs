//! Display formatting for prices and installment plans.

use storefront_core::{DomainResult, Money};

use crate::product::Installment;

/// `19.5` → `"19,50"`.
pub fn format_price(price: f64) -> String {
    Money::new(price).to_display()
}

/// `[3, 99.9]` → `"3x de R$99,90"`.
///
/// Anything but a 2-element plan is a formatting error.
pub fn format_installment(parcelamento: &[f64]) -> DomainResult<String> {
    Installment::from_slice(parcelamento).map(|plan| plan.to_string())
}
