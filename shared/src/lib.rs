//! Shared types for the Aquavita ordering stack
//!
//! Common types used across multiple crates: domain models, the pricing
//! calculator, error types, and utility helpers.

pub mod error;
pub mod models;
pub mod pricing;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{BottleSize, LocationDetails, OrderItem, SavedLocation};
pub use pricing::DiscountRates;
