//! Capabilities the orchestrator is built against

use async_trait::async_trait;

use authz_client::{AuthzResult, Relationship};
use shared::Cancellation;

use crate::types::RunSummary;

/// Rate-limited add/delete of relationships
///
/// Every call waits for a token from the one limiter shared by the whole
/// run before it reaches the service.
#[mockall::automock]
#[async_trait]
pub trait RelationshipStore: Send + Sync {
    /// Write a whole set, returning the service's snapshot token
    async fn add(&self, ctx: &Cancellation, set: &[Relationship]) -> AuthzResult<String>;

    /// Remove exactly one tuple
    async fn delete(&self, ctx: &Cancellation, relationship: &Relationship) -> AuthzResult<()>;
}

/// Progress signals emitted while a run advances
#[mockall::automock]
pub trait ProgressReporter: Send + Sync {
    fn run_started(&self, iterations: u32, count: usize);

    fn iteration_started(&self, iteration: u32);

    /// A set was written and its index published
    fn added(&self, index: usize);

    /// Every tuple of a set was deleted
    fn deleted(&self, index: usize);

    fn iteration_done(&self, iteration: u32);

    fn run_complete(&self, summary: &RunSummary);
}
