//! Client library for a Permify-style relationship authorization service
//!
//! Every request goes through a single shared token-bucket limiter, so the
//! aggregate request rate of all tasks sharing one client is bounded by the
//! configured limit.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod rate_limiter;
pub mod requests;
pub mod services;
pub mod traits;
pub mod validation;

mod client;

// Re-export main types
pub use client::HttpAuthzClient;
pub use config::ClientConfig;
pub use error::{AuthzError, AuthzResult, Operation};
pub use models::*;
pub use rate_limiter::RateLimiter;
pub use requests::*;
pub use traits::*;
