//! Relationship churn harness
//!
//! Repeatedly adds and deletes the same relationship sets against an
//! authorization service from many concurrent tasks, so that duplicate or
//! partial writes in the backend show up as failures.

pub mod bootstrap;
pub mod error;
pub mod generator;
pub mod handoff;
pub mod orchestrator;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use bootstrap::{bootstrap, TEST_SCHEMA};
pub use error::{ChurnError, ChurnResult};
pub use generator::{generate, make_relationships, RelationshipSet};
pub use handoff::HandoffQueue;
pub use orchestrator::ChurnOrchestrator;
pub use traits::{MockProgressReporter, MockRelationshipStore, ProgressReporter, RelationshipStore};
pub use types::{ChurnConfig, RunSummary, TENANT_ID};
