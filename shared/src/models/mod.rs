//! Domain models shared across the Aquavita crates

pub mod brand;
pub mod catalog;
pub mod complaint;
pub mod location;
pub mod subscription;

pub use brand::BrandInfo;
pub use catalog::{BottleSize, OrderItem, default_catalog};
pub use complaint::{ComplaintForm, ComplaintType};
pub use location::{LocationDetails, LocationSource, SavedLocation, PICKER_CITIES};
pub use subscription::{SubscriptionPlan, default_plans};
