//! Wire models shared by requests and responses

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::codec;

/// A typed object in the authorization graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(with = "codec::id")]
    pub id: String,
}

impl Entity {
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self { entity_type: entity_type.into(), id: id.into() }
    }
}

/// The receiving side of a relationship
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "type")]
    pub subject_type: String,
    #[serde(with = "codec::id")]
    pub id: String,
}

impl Subject {
    pub fn new(subject_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self { subject_type: subject_type.into(), id: id.into() }
    }
}

/// One (entity, relation, subject) tuple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub entity: Entity,
    pub relation: String,
    pub subject: Subject,
}

impl Relationship {
    pub fn new(entity: Entity, relation: impl Into<String>, subject: Subject) -> Self {
        Self { entity, relation: relation.into(), subject }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} -> {} -> {}:{}",
            self.entity.entity_type, self.entity.id, self.relation, self.subject.subject_type, self.subject.id
        )
    }
}

/// Selects relationships by entity ids, relation and subject ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipFilter {
    pub entity: EntityIdSet,
    pub relation: String,
    pub subject: SubjectIdSet,
}

impl RelationshipFilter {
    /// A filter matching exactly one relationship
    pub fn matching(relationship: &Relationship) -> Self {
        Self {
            entity: EntityIdSet {
                entity_type: relationship.entity.entity_type.clone(),
                ids: vec![relationship.entity.id.clone()],
            },
            relation: relationship.relation.clone(),
            subject: SubjectIdSet {
                subject_type: relationship.subject.subject_type.clone(),
                ids: vec![relationship.subject.id.clone()],
                relation: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityIdSet {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(with = "codec::ids", default)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectIdSet {
    #[serde(rename = "type")]
    pub subject_type: String,
    #[serde(with = "codec::ids", default)]
    pub ids: Vec<String>,
    #[serde(default)]
    pub relation: String,
}

/// Error fields the service inlines into any response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Any error field at all was present in the body
    pub fn is_present(&self) -> bool {
        self.code.is_some() || self.message.is_some() || self.details.is_some()
    }

    /// The body carried a non-zero error code
    pub fn has_error_code(&self) -> bool {
        self.code.is_some_and(|code| code != 0)
    }
}

/// Write acknowledgement carrying the snapshot token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSnap {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub snap_token: String,
}

impl RelationshipSnap {
    /// A write only counts when no error is present and a token came back
    pub fn is_success(&self) -> bool {
        !self.error.is_present() && !self.snap_token.is_empty()
    }
}

/// Request metadata; empty fields are omitted on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub snap_token: String,
    /// Graph search depth limit for permission queries
    #[serde(default, skip_serializing_if = "is_zero")]
    pub depth: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheckResponseMetadata {
    #[serde(default)]
    pub check_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "tenant", default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

// Permission expansion tree, only the parts needed to collect leaf ids

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ExpandResponse {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(default)]
    pub tree: ExpandTree,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ExpandTree {
    #[serde(default)]
    pub leaf: ExpandLeaf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ExpandLeaf {
    #[serde(default)]
    pub subjects: SubjectLeaves,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SubjectLeaves {
    #[serde(default)]
    pub subjects: Vec<Leaf>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Leaf {
    #[serde(with = "crate::codec::id")]
    pub id: String,
}
