//! Receipt content assembly
//!
//! [`ReceiptData`] is the complete, ordered content of one receipt. It is
//! built from the finalized order state and re-derives every figure through
//! `shared::pricing`, so the document can never disagree with what the
//! checkout screen displayed.

use serde::{Deserialize, Serialize};
use shared::models::{BottleSize, BrandInfo, LocationDetails, OrderItem};
use shared::pricing::{self, DiscountRates};

/// One included item line (zero-quantity items are excluded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRow {
    /// 1-based sequence number within the receipt
    pub seq: usize,
    pub name: String,
    pub qty_500ml: i32,
    pub price_500ml: f64,
    pub qty_1000ml: i32,
    pub price_1000ml: f64,
    /// Row amount across both sizes, discounts applied
    pub total: f64,
}

/// Summary row over the included items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptTotals {
    pub qty_500ml: i64,
    pub qty_1000ml: i64,
    pub amount: f64,
}

/// Complete receipt content in render order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub order_id: String,
    /// Generation date (YYYY-MM-DD)
    pub date: String,
    pub address: LocationDetails,
    pub rows: Vec<ReceiptRow>,
    pub totals: ReceiptTotals,
    pub brand: BrandInfo,
}

impl ReceiptData {
    /// Assemble a receipt from the finalized order state.
    ///
    /// Items with zero quantity for both sizes are excluded; the totals row
    /// is derived from the included rows only.
    pub fn build(
        order_id: impl Into<String>,
        generated_at_millis: i64,
        address: &LocationDetails,
        items: &[OrderItem],
        rates: &DiscountRates,
        brand: &BrandInfo,
    ) -> Self {
        let included: Vec<&OrderItem> =
            items.iter().filter(|item| item.has_any_quantity()).collect();

        let rows: Vec<ReceiptRow> = included
            .iter()
            .enumerate()
            .map(|(idx, item)| ReceiptRow {
                seq: idx + 1,
                name: item.name.clone(),
                qty_500ml: item.quantity_500ml,
                price_500ml: item.price_500ml,
                qty_1000ml: item.quantity_1000ml,
                price_1000ml: item.price_1000ml,
                total: pricing::item_total(item, rates),
            })
            .collect();

        let included_owned: Vec<OrderItem> = included.into_iter().cloned().collect();
        let totals = ReceiptTotals {
            qty_500ml: pricing::total_quantity(&included_owned, BottleSize::Ml500),
            qty_1000ml: pricing::total_quantity(&included_owned, BottleSize::Ml1000),
            amount: pricing::order_total(&included_owned, rates),
        };

        Self {
            order_id: order_id.into(),
            date: shared::util::receipt_date(generated_at_millis),
            address: address.clone(),
            rows,
            totals,
            brand: brand.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> LocationDetails {
        LocationDetails {
            state: "Andhra Pradesh".to_string(),
            district: "Krishna".to_string(),
            mandal: "Ibrahimpatnam".to_string(),
            village: "Kondapalli".to_string(),
            address: "4-21 Main Road".to_string(),
            ..Default::default()
        }
    }

    fn items() -> Vec<OrderItem> {
        let mut catalog = shared::models::default_catalog();
        catalog[0].set_quantity(BottleSize::Ml500, 2);
        catalog[0].set_quantity(BottleSize::Ml1000, 1);
        catalog[2].set_quantity(BottleSize::Ml1000, 4);
        catalog
    }

    #[test]
    fn test_zero_quantity_items_excluded() {
        let receipt = ReceiptData::build(
            "ORD-7",
            0,
            &address(),
            &items(),
            &DiscountRates::none(),
            &BrandInfo::default(),
        );

        // Vedica (all-zero) is excluded; sequence renumbers the included rows
        assert_eq!(receipt.rows.len(), 2);
        assert_eq!(receipt.rows[0].name, "Aquavita Natural Mineral Water");
        assert_eq!(receipt.rows[0].seq, 1);
        assert_eq!(receipt.rows[1].name, "Aquavita Soda");
        assert_eq!(receipt.rows[1].seq, 2);
    }

    #[test]
    fn test_totals_cover_included_rows_only() {
        let receipt = ReceiptData::build(
            "ORD-7",
            0,
            &address(),
            &items(),
            &DiscountRates::none(),
            &BrandInfo::default(),
        );

        assert_eq!(receipt.totals.qty_500ml, 2);
        assert_eq!(receipt.totals.qty_1000ml, 5);
        // 2*10 + 1*20 + 4*22 = 128
        assert_eq!(receipt.totals.amount, 128.0);
        let row_sum: f64 = receipt.rows.iter().map(|r| r.total).sum();
        assert!((receipt.totals.amount - row_sum).abs() < 0.005);
    }

    #[test]
    fn test_discounts_flow_into_rows() {
        let receipt = ReceiptData::build(
            "ORD-8",
            0,
            &address(),
            &items(),
            &DiscountRates::standard(),
            &BrandInfo::default(),
        );

        // 2*10*0.55 + 1*20*0.70 = 25.00
        assert_eq!(receipt.rows[0].total, 25.0);
        // Unit prices stay at catalog value for display
        assert_eq!(receipt.rows[0].price_500ml, 10.0);
    }
}
