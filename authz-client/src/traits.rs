//! Capability traits for dependency injection
//!
//! `HttpAuthzClient` implements both traits, so one constructed client can be
//! handed to the schema bootstrap and to the relationship workload alike.

use async_trait::async_trait;
use shared::Cancellation;

use crate::error::AuthzResult;
use crate::models::{Entity, RelationshipSnap, Subject};
use crate::requests::{
    AddRelationshipRequest, CreateTenantRequest, CreateTenantResponse, DeleteRelationshipRequest,
    DeleteTenantResponse, FindRelationshipsRequest, FindRelationshipsResponse, ListTenantsRequest,
    ListTenantsResponse, LookupRelationshipRequest, LookupRelationshipResponse, SaveSchemaRequest,
    SaveSchemaResponse,
};

/// Relationship reads and writes against one tenant
#[mockall::automock]
#[async_trait]
pub trait RelationshipClient: Send + Sync {
    /// Write the relationships; succeeds only when the service returns a
    /// snapshot token and no error.
    async fn add_relationship(
        &self,
        ctx: &Cancellation,
        request: &AddRelationshipRequest,
    ) -> AuthzResult<RelationshipSnap>;

    /// Entities of `entity_type` on which the subject holds the permission
    async fn lookup_relationship(
        &self,
        ctx: &Cancellation,
        request: &LookupRelationshipRequest,
    ) -> AuthzResult<LookupRelationshipResponse>;

    /// Subjects reached by expanding a permission on an entity
    async fn find_relationships(
        &self,
        ctx: &Cancellation,
        request: &FindRelationshipsRequest,
    ) -> AuthzResult<FindRelationshipsResponse>;

    /// Remove the relationships matched by the filter
    async fn delete_relationship(&self, ctx: &Cancellation, request: &DeleteRelationshipRequest) -> AuthzResult<()>;

    async fn check_permission(
        &self,
        ctx: &Cancellation,
        subject: &Subject,
        entity: &Entity,
        permission: &str,
    ) -> AuthzResult<bool>;
}

/// Tenant and schema administration, used once before a workload runs
#[mockall::automock]
#[async_trait]
pub trait SchemaManagerClient: Send + Sync {
    /// Blank id, name or creation time are filled in before sending
    async fn create_tenant(&self, ctx: &Cancellation, tenant: CreateTenantRequest) -> AuthzResult<CreateTenantResponse>;

    async fn delete_tenant(&self, ctx: &Cancellation, tenant_id: &str) -> AuthzResult<DeleteTenantResponse>;

    async fn list_tenants(&self, ctx: &Cancellation, request: &ListTenantsRequest) -> AuthzResult<ListTenantsResponse>;

    async fn save_model_schema(&self, ctx: &Cancellation, request: &SaveSchemaRequest) -> AuthzResult<SaveSchemaResponse>;
}
