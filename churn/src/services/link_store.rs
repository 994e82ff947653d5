//! Relationship store backed by the authorization client

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use authz_client::{AddRelationshipRequest, AuthzResult, DeleteRelationshipRequest, Relationship, RelationshipClient};
use shared::Cancellation;

use crate::traits::RelationshipStore;

/// Adds whole sets and deletes single tuples through a shared client.
///
/// The client owns the rate limiter, so every clone of the `Arc` handed in
/// here draws from the same bucket.
pub struct RateLimitedLinkStore<C> {
    client: Arc<C>,
}

impl<C: RelationshipClient> RateLimitedLinkStore<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: RelationshipClient + 'static> RelationshipStore for RateLimitedLinkStore<C> {
    async fn add(&self, ctx: &Cancellation, set: &[Relationship]) -> AuthzResult<String> {
        let request = AddRelationshipRequest::new(set.to_vec());
        let snap = self.client.add_relationship(ctx, &request).await?;
        trace!(tuples = set.len(), snap_token = %snap.snap_token, "set written");
        Ok(snap.snap_token)
    }

    async fn delete(&self, ctx: &Cancellation, relationship: &Relationship) -> AuthzResult<()> {
        let request = DeleteRelationshipRequest::for_relationship(relationship);
        self.client.delete_relationship(ctx, &request).await
    }
}
