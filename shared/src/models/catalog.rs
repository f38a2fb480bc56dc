//! Catalog Models
//!
//! The orderable catalog is fixed per session: created once with zero
//! quantities, never resized. Unit prices are immutable catalog constants;
//! only the per-size quantities are mutated by the wizard.

use serde::{Deserialize, Serialize};

/// Bottle size sold for every catalog product
///
/// An explicit enum instead of stringly-typed field access, so quantity
/// updates dispatch through one typed function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BottleSize {
    Ml500,
    Ml1000,
}

impl BottleSize {
    pub const ALL: [BottleSize; 2] = [BottleSize::Ml500, BottleSize::Ml1000];

    /// Display label used in tables and receipts
    pub fn label(&self) -> &'static str {
        match self {
            BottleSize::Ml500 => "500ml",
            BottleSize::Ml1000 => "1000ml",
        }
    }
}

/// One orderable product with per-size pricing and quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique within the catalog; insertion order is the display order
    pub id: u32,
    pub name: String,
    /// Unit price for a 500ml bottle (catalog constant)
    pub price_500ml: f64,
    /// Unit price for a 1000ml bottle (catalog constant)
    pub price_1000ml: f64,
    pub quantity_500ml: i32,
    pub quantity_1000ml: i32,
}

impl OrderItem {
    pub fn new(id: u32, name: impl Into<String>, price_500ml: f64, price_1000ml: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price_500ml,
            price_1000ml,
            quantity_500ml: 0,
            quantity_1000ml: 0,
        }
    }

    pub fn price(&self, size: BottleSize) -> f64 {
        match size {
            BottleSize::Ml500 => self.price_500ml,
            BottleSize::Ml1000 => self.price_1000ml,
        }
    }

    pub fn quantity(&self, size: BottleSize) -> i32 {
        match size {
            BottleSize::Ml500 => self.quantity_500ml,
            BottleSize::Ml1000 => self.quantity_1000ml,
        }
    }

    /// Set the quantity for one size, clamped to >= 0
    pub fn set_quantity(&mut self, size: BottleSize, value: i32) {
        let clamped = value.max(0);
        match size {
            BottleSize::Ml500 => self.quantity_500ml = clamped,
            BottleSize::Ml1000 => self.quantity_1000ml = clamped,
        }
    }

    /// True if either size has a positive quantity
    pub fn has_any_quantity(&self) -> bool {
        self.quantity_500ml > 0 || self.quantity_1000ml > 0
    }
}

/// The fixed product catalog, zero quantities
pub fn default_catalog() -> Vec<OrderItem> {
    vec![
        OrderItem::new(1, "Aquavita Natural Mineral Water", 10.0, 20.0),
        OrderItem::new(2, "Aquavita Vedica", 15.0, 30.0),
        OrderItem::new(3, "Aquavita Soda", 12.0, 22.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_quantity_clamps_negative() {
        let mut item = OrderItem::new(1, "Test", 10.0, 20.0);
        item.set_quantity(BottleSize::Ml500, -5);
        assert_eq!(item.quantity_500ml, 0);
        item.set_quantity(BottleSize::Ml1000, 3);
        assert_eq!(item.quantity_1000ml, 3);
    }

    #[test]
    fn test_size_dispatch() {
        let mut item = OrderItem::new(1, "Test", 10.0, 20.0);
        item.set_quantity(BottleSize::Ml500, 2);
        assert_eq!(item.quantity(BottleSize::Ml500), 2);
        assert_eq!(item.quantity(BottleSize::Ml1000), 0);
        assert_eq!(item.price(BottleSize::Ml1000), 20.0);
    }

    #[test]
    fn test_set_quantity_leaves_other_size() {
        let mut item = OrderItem::new(1, "Test", 10.0, 20.0);
        item.set_quantity(BottleSize::Ml500, 4);
        item.set_quantity(BottleSize::Ml1000, 7);

        item.set_quantity(BottleSize::Ml500, 9);
        assert_eq!(item.quantity(BottleSize::Ml500), 9);
        assert_eq!(item.quantity(BottleSize::Ml1000), 7);

        item.set_quantity(BottleSize::Ml1000, 0);
        assert_eq!(item.quantity(BottleSize::Ml500), 9);
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|i| !i.has_any_quantity()));
        // Insertion order doubles as display order
        let ids: Vec<u32> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
