//! # aqua-receipt
//!
//! Order receipt generation - document assembly and PDF rendering.
//!
//! ## Scope
//!
//! This crate handles HOW a receipt becomes a downloadable artifact:
//! - [`ReceiptData`]: the ordered content of a receipt, with rows filtered
//!   and totals re-derived through the shared pricing calculator
//! - [`render_pdf`]: fixed-layout PDF rendering to bytes
//! - [`save_to_dir`]: write the artifact under its fixed file name
//!
//! Deciding WHEN a receipt may be generated (order validity, wizard step)
//! stays in application code. Every rendering failure is returned as a
//! [`ReceiptError`] so the caller can surface it instead of dropping it.

mod data;
mod error;
mod renderer;

// Re-exports
pub use data::{ReceiptData, ReceiptRow, ReceiptTotals};
pub use error::{ReceiptError, ReceiptResult};
pub use renderer::{render_pdf, save_to_dir, RECEIPT_FILE_NAME};
