//! Three-step order wizard
//!
//! Steps advance strictly `Location -> Items -> Checkout`. Each forward
//! transition is gated by a validation predicate; moving backward is always
//! allowed and never discards entered data. Placing the order is only
//! permitted at the checkout step and leaves the wizard state untouched so
//! the confirmation screen can still render the order.

use crate::location_store::{LocationStore, StoreError};
use aqua_receipt::ReceiptData;
use shared::error::{AppError, ErrorCode};
use shared::models::{BottleSize, BrandInfo, LocationDetails, OrderItem, default_catalog};
use shared::pricing::{self, DiscountRates};
use shared::util::now_millis;
use thiserror::Error;
use uuid::Uuid;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Location,
    Items,
    Checkout,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("delivery location details are incomplete")]
    LocationIncomplete,

    #[error("order has no items with a positive quantity")]
    OrderEmpty,

    #[error("item {0} not found in catalog")]
    ItemNotFound(u32),

    #[error("already at the final step")]
    AtFinalStep,

    #[error("operation requires the checkout step")]
    NotAtCheckout,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::LocationIncomplete => ErrorCode::LocationIncomplete,
            WizardError::OrderEmpty => ErrorCode::OrderEmpty,
            WizardError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            WizardError::AtFinalStep | WizardError::NotAtCheckout => ErrorCode::StepNotAllowed,
            WizardError::Store(_) => ErrorCode::StorageUnavailable,
        }
    }
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Payment methods accepted at checkout
///
/// Online payment options are not offered yet; cash on delivery is the only
/// accepted method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
}

/// Result of placing an order
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub placed_at: i64,
    pub payment: PaymentMethod,
    pub total: f64,
    pub quantity_500ml: i64,
    pub quantity_1000ml: i64,
}

/// True when every required delivery field is filled (whitespace-only is empty)
pub fn is_location_valid(location: &LocationDetails) -> bool {
    location
        .required_fields()
        .iter()
        .all(|(_, value)| !value.trim().is_empty())
}

/// True when at least one catalog row has a positive quantity in either size
pub fn is_order_valid(items: &[OrderItem]) -> bool {
    items.iter().any(OrderItem::has_any_quantity)
}

/// Parse free-form quantity input: non-numeric becomes 0, negatives clamp to 0
pub fn parse_quantity(input: &str) -> i32 {
    input.trim().parse::<i32>().unwrap_or(0).max(0)
}

/// Order wizard state machine
pub struct OrderWizard {
    session_id: Uuid,
    step: Step,
    location: LocationDetails,
    items: Vec<OrderItem>,
    rates: DiscountRates,
}

impl OrderWizard {
    /// New wizard over the default catalog
    pub fn new(rates: DiscountRates) -> Self {
        Self::with_catalog(default_catalog(), rates)
    }

    pub fn with_catalog(items: Vec<OrderItem>, rates: DiscountRates) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            step: Step::Location,
            location: LocationDetails::default(),
            items,
            rates,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn location(&self) -> &LocationDetails {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut LocationDetails {
        &mut self.location
    }

    pub fn rates(&self) -> &DiscountRates {
        &self.rates
    }

    // ========== Step Transitions ==========

    /// Whether the current step's gate would allow advancing
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Location => is_location_valid(&self.location),
            Step::Items => is_order_valid(&self.items),
            Step::Checkout => false,
        }
    }

    /// Advance to the next step if the current step's gate passes
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        self.step = match self.step {
            Step::Location => {
                if !is_location_valid(&self.location) {
                    return Err(WizardError::LocationIncomplete);
                }
                Step::Items
            }
            Step::Items => {
                if !is_order_valid(&self.items) {
                    return Err(WizardError::OrderEmpty);
                }
                Step::Checkout
            }
            Step::Checkout => return Err(WizardError::AtFinalStep),
        };
        Ok(self.step)
    }

    /// Step backward, keeping all entered data. At the first step this is a no-op.
    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Location => Step::Location,
            Step::Items => Step::Location,
            Step::Checkout => Step::Items,
        };
        self.step
    }

    /// Discard all entered data and return to the first step
    pub fn reset(&mut self) {
        self.step = Step::Location;
        self.location = LocationDetails::default();
        for item in &mut self.items {
            item.quantity_500ml = 0;
            item.quantity_1000ml = 0;
        }
    }

    // ========== Quantities ==========

    /// Set one item's quantity for one bottle size (negatives clamp to 0)
    pub fn set_quantity(
        &mut self,
        item_id: u32,
        size: BottleSize,
        value: i32,
    ) -> Result<(), WizardError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(WizardError::ItemNotFound(item_id))?;
        item.set_quantity(size, value);
        Ok(())
    }

    /// Set every item's quantity for one bottle size to the same value
    pub fn set_all_quantities(&mut self, size: BottleSize, value: i32) {
        for item in &mut self.items {
            item.set_quantity(size, value);
        }
    }

    // ========== Totals ==========

    pub fn order_total(&self) -> f64 {
        pricing::order_total(&self.items, &self.rates)
    }

    pub fn total_quantity(&self, size: BottleSize) -> i64 {
        pricing::total_quantity(&self.items, size)
    }

    // ========== Checkout ==========

    /// Place the order: allocate a persistent order id and log the sale.
    ///
    /// Requires the checkout step. The wizard state is left untouched so the
    /// confirmation can still show the order and a receipt can be produced.
    pub fn place_order(&self, store: &LocationStore) -> Result<OrderConfirmation, WizardError> {
        if self.step != Step::Checkout {
            return Err(WizardError::NotAtCheckout);
        }
        // The gate should have caught this, but the store counter must never
        // advance for an empty order.
        if !is_order_valid(&self.items) {
            return Err(WizardError::OrderEmpty);
        }

        let order_id = store.next_order_id()?;
        let confirmation = OrderConfirmation {
            order_id,
            placed_at: now_millis(),
            payment: PaymentMethod::CashOnDelivery,
            total: self.order_total(),
            quantity_500ml: self.total_quantity(BottleSize::Ml500),
            quantity_1000ml: self.total_quantity(BottleSize::Ml1000),
        };

        tracing::info!(
            session_id = %self.session_id,
            order_id = %confirmation.order_id,
            total = confirmation.total,
            quantity_500ml = confirmation.quantity_500ml,
            quantity_1000ml = confirmation.quantity_1000ml,
            "order placed"
        );

        Ok(confirmation)
    }

    /// Build the receipt data for a placed order (checkout step only)
    pub fn build_receipt(
        &self,
        order_id: &str,
        brand: &BrandInfo,
    ) -> Result<ReceiptData, WizardError> {
        if self.step != Step::Checkout {
            return Err(WizardError::NotAtCheckout);
        }
        Ok(ReceiptData::build(
            order_id,
            now_millis(),
            &self.location,
            &self.items,
            &self.rates,
            brand,
        ))
    }
}
