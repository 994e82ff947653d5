//! Request and response payloads

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::constants::CHECK_RESULT_ALLOWED;
use crate::models::{
    Entity, ErrorResponse, Metadata, PermissionCheckResponseMetadata, Relationship, RelationshipFilter,
    Subject, Tenant,
};

/// Create or modify relationships in one write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRelationshipRequest {
    pub metadata: Metadata,
    #[serde(rename = "tuples")]
    pub relationships: Vec<Relationship>,
}

impl AddRelationshipRequest {
    pub fn new(relationships: Vec<Relationship>) -> Self {
        Self { metadata: Metadata::default(), relationships }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRelationshipRequest {
    pub filter: RelationshipFilter,
}

impl DeleteRelationshipRequest {
    /// Delete exactly the given relationship
    pub fn for_relationship(relationship: &Relationship) -> Self {
        Self { filter: RelationshipFilter::matching(relationship) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheckRequest {
    pub metadata: Metadata,
    pub entity: Entity,
    pub permission: String,
    pub subject: Subject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheckResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub can: String,
    #[serde(default)]
    pub metadata: PermissionCheckResponseMetadata,
}

impl PermissionCheckResponse {
    pub fn is_allowed(&self) -> bool {
        self.can == CHECK_RESULT_ALLOWED
    }
}

// Model management

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSchemaRequest {
    pub schema: String,
}

impl SaveSchemaRequest {
    pub fn new(schema: impl Into<String>) -> Self {
        Self { schema: schema.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSchemaResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub schema_version: String,
}

/// Blank fields are filled in by the client before sending
pub type CreateTenantRequest = Tenant;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTenantResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub tenant: Option<Tenant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTenantResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub tenant: Option<Tenant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTenantsRequest {
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub continuous_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTenantsResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub continuous_token: String,
}

// Permission queries

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRelationshipRequest {
    pub metadata: Metadata,
    pub entity_type: String,
    pub permission: String,
    pub subject: Subject,
}

impl LookupRelationshipRequest {
    pub fn new(entity_type: impl Into<String>, permission: impl Into<String>, subject: Subject) -> Self {
        Self {
            metadata: Metadata::default(),
            entity_type: entity_type.into(),
            permission: permission.into(),
            subject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRelationshipResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(with = "codec::ids", default)]
    pub entity_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindRelationshipsRequest {
    pub metadata: Metadata,
    pub entity: Entity,
    pub permission: String,
}

impl FindRelationshipsRequest {
    pub fn new(entity: Entity, permission: impl Into<String>) -> Self {
        Self { metadata: Metadata::default(), entity, permission: permission.into() }
    }
}

/// Subject ids found by expanding a permission
pub type FindRelationshipsResponse = LookupRelationshipResponse;
