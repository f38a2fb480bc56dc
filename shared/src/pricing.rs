//! Pricing calculator using rust_decimal for precision
//!
//! All monetary arithmetic is done in `Decimal` internally, then converted
//! back to `f64` for display/serialization. Every displayed figure comes from
//! the same [`line_amount`] formula, so the grand total always equals the sum
//! of the displayed rows at the configured precision.

use crate::models::{BottleSize, OrderItem};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Per-size fractional discount rates
///
/// Named configuration, never hard-coded in formatting code. `0.45` means
/// 45% off the catalog price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountRates {
    pub ml500: f64,
    pub ml1000: f64,
}

impl DiscountRates {
    /// No discount on either size
    pub const fn none() -> Self {
        Self {
            ml500: 0.0,
            ml1000: 0.0,
        }
    }

    /// Current promotional rates (45% off 500ml, 30% off 1000ml)
    pub const fn standard() -> Self {
        Self {
            ml500: 0.45,
            ml1000: 0.30,
        }
    }

    pub fn new(ml500: f64, ml1000: f64) -> Self {
        Self { ml500, ml1000 }
    }

    pub fn rate(&self, size: BottleSize) -> f64 {
        match size {
            BottleSize::Ml500 => self.ml500,
            BottleSize::Ml1000 => self.ml1000,
        }
    }
}

impl Default for DiscountRates {
    fn default() -> Self {
        Self::none()
    }
}

/// Convert f64 to Decimal, treating non-finite input as zero
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage/serialization
fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Total quantity across the collection for one size
pub fn total_quantity(items: &[OrderItem], size: BottleSize) -> i64 {
    items.iter().map(|item| item.quantity(size) as i64).sum()
}

/// Amount for one item and one size: `quantity * price * (1 - rate)`
pub fn line_amount(item: &OrderItem, size: BottleSize, rate: f64) -> f64 {
    let amount =
        Decimal::from(item.quantity(size)) * to_decimal(item.price(size)) * (Decimal::ONE - to_decimal(rate));
    to_f64(round_money(amount))
}

/// Amount for one item across both sizes
pub fn item_total(item: &OrderItem, rates: &DiscountRates) -> f64 {
    let total: Decimal = BottleSize::ALL
        .iter()
        .map(|&size| to_decimal(line_amount(item, size, rates.rate(size))))
        .sum();
    to_f64(total)
}

/// Subtotal across the collection for one size
pub fn size_subtotal(items: &[OrderItem], size: BottleSize, rate: f64) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| to_decimal(line_amount(item, size, rate)))
        .sum();
    to_f64(total)
}

/// Grand total across all items and sizes
pub fn order_total(items: &[OrderItem], rates: &DiscountRates) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| to_decimal(item_total(item, rates)))
        .sum();
    to_f64(total)
}

/// Format an amount as a rupee string with two decimals
pub fn format_amount(value: f64) -> String {
    format!("Rs.{:.2}", value)
}
