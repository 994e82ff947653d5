//! Service implementations
//!
//! Production implementations of the churn capability traits.

pub mod link_store;
pub mod progress;

#[cfg(test)]
mod tests;

pub use link_store::RateLimitedLinkStore;
pub use progress::ConsoleProgress;
