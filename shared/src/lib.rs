//! Shared building blocks for the relationship churn harness
//!
//! Contains only what both the authorization client and the churn
//! harness need: run cancellation, configuration errors and tracing setup.

pub mod cancel;
pub mod errors;
pub mod logging;

pub use cancel::Cancellation;
pub use errors::*;
