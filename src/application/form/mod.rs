//! # Quote Form
//!
//! Editable form state and everything around it:
//!
//! - [`FormModel`]: What the user has entered
//! - [`validation`]: Field checks
//! - [`params_codec`]: Form ↔ query parameters
//! - [`sync`]: Feedback-free two-way binding to the navigator
//! - [`QuoteFormController`]: Pricing, submission and reset
//! - [`help`]: Help texts for the size controls

pub mod controller;
pub mod help;
pub mod model;
pub mod params_codec;
pub mod sync;
pub mod validation;

pub use controller::QuoteFormController;
pub use model::{FormModel, WebConfigModel};
pub use sync::{QuerySync, SyncState};
pub use validation::{FormValidator, ValidationConfig};
