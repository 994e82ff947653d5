//! Relationship reads and writes

use async_trait::async_trait;
use tracing::debug;

use shared::Cancellation;
use crate::client::{decode, HttpAuthzClient};
use crate::constants::{ApiPath, MAX_QUERY_DEPTH};
use crate::error::{AuthzError, AuthzResult, Operation};
use crate::models::{Entity, ExpandResponse, Metadata, RelationshipSnap, Subject};
use crate::requests::{
    AddRelationshipRequest, DeleteRelationshipRequest, FindRelationshipsRequest, FindRelationshipsResponse,
    LookupRelationshipRequest, LookupRelationshipResponse, PermissionCheckRequest, PermissionCheckResponse,
};
use crate::traits::RelationshipClient;
use crate::validation;

#[async_trait]
impl RelationshipClient for HttpAuthzClient {
    async fn add_relationship(
        &self,
        ctx: &Cancellation,
        request: &AddRelationshipRequest,
    ) -> AuthzResult<RelationshipSnap> {
        validation::validate_add_request(request)?;

        let url = self.url(ApiPath::RelationshipWrite);
        let body = self.post(ctx, &url, request).await?;
        let response: RelationshipSnap = decode(&body)?;

        if !response.is_success() {
            return Err(AuthzError::rejected(Operation::CreateRelationship, &response.error));
        }

        debug!(tuples = request.relationships.len(), snap_token = %response.snap_token, "relationships written");
        Ok(response)
    }

    async fn lookup_relationship(
        &self,
        ctx: &Cancellation,
        request: &LookupRelationshipRequest,
    ) -> AuthzResult<LookupRelationshipResponse> {
        validation::validate_lookup_request(request)?;

        let mut request = request.clone();
        request.metadata.depth = MAX_QUERY_DEPTH;

        let url = self.url(ApiPath::LookupEntity);
        let body = self.post(ctx, &url, &request).await?;
        let response: LookupRelationshipResponse = decode(&body)?;

        if response.error.has_error_code() {
            return Err(AuthzError::rejected(Operation::LookupRelationship, &response.error));
        }

        Ok(response)
    }

    async fn find_relationships(
        &self,
        ctx: &Cancellation,
        request: &FindRelationshipsRequest,
    ) -> AuthzResult<FindRelationshipsResponse> {
        validation::validate_find_request(request)?;

        let mut request = request.clone();
        request.metadata.depth = MAX_QUERY_DEPTH;

        let url = self.url(ApiPath::Expand);
        let body = self.post(ctx, &url, &request).await?;
        let expanded: ExpandResponse = decode(&body)?;

        if expanded.error.is_present() {
            return Err(AuthzError::rejected(Operation::FindRelationships, &expanded.error));
        }

        let entity_ids = expanded
            .tree
            .leaf
            .subjects
            .subjects
            .into_iter()
            .map(|leaf| leaf.id)
            .collect();

        Ok(FindRelationshipsResponse { entity_ids, ..Default::default() })
    }

    async fn delete_relationship(&self, ctx: &Cancellation, request: &DeleteRelationshipRequest) -> AuthzResult<()> {
        validation::validate_delete_request(request)?;

        let url = self.url(ApiPath::RelationshipDelete);
        let body = self.post(ctx, &url, request).await?;
        let response: RelationshipSnap = decode(&body)?;

        if !response.is_success() {
            return Err(AuthzError::rejected(Operation::DeleteRelationship, &response.error));
        }

        debug!(relation = %request.filter.relation, snap_token = %response.snap_token, "relationship deleted");
        Ok(())
    }

    async fn check_permission(
        &self,
        ctx: &Cancellation,
        subject: &Subject,
        entity: &Entity,
        permission: &str,
    ) -> AuthzResult<bool> {
        validation::validate_permission_check(subject, entity, permission)?;

        let request = PermissionCheckRequest {
            metadata: Metadata { depth: MAX_QUERY_DEPTH, ..Metadata::default() },
            entity: entity.clone(),
            permission: permission.to_string(),
            subject: subject.clone(),
        };

        let url = self.url(ApiPath::PermissionCheck);
        let body = self.post(ctx, &url, &request).await?;
        let response: PermissionCheckResponse = decode(&body)?;

        if response.error.has_error_code() {
            return Err(AuthzError::rejected(Operation::CheckPermission, &response.error));
        }

        Ok(response.is_allowed())
    }
}
