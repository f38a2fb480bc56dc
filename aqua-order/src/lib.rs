//! # aqua-order
//!
//! Application crate for the Aquavita ordering flow.
//!
//! | Module           | Responsibility                                  |
//! |------------------|--------------------------------------------------|
//! | `wizard`         | Three-step order wizard state machine            |
//! | `location_store` | redb-backed delivery location + order counter    |
//! | `detect`         | GPS detection flow (guard + geocoder + store)    |
//! | `subscription`   | Subscription plan selection                      |
//! | `complaint`      | Complaint intake with validation                 |
//! | `config`         | Environment-driven runtime configuration         |

pub mod complaint;
pub mod config;
pub mod detect;
pub mod location_store;
pub mod subscription;
pub mod wizard;

pub use config::Config;
pub use location_store::{LocationStore, StoreError, StoreResult};
pub use wizard::{OrderConfirmation, OrderWizard, PaymentMethod, Step, WizardError};
