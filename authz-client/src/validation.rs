//! Request validation, run before any network call

use crate::codec;
use crate::error::{AuthzError, AuthzResult};
use crate::models::{Entity, Relationship, Subject};
use crate::requests::{
    AddRelationshipRequest, DeleteRelationshipRequest, FindRelationshipsRequest, LookupRelationshipRequest,
};

/// Ids must survive the wire rewrite unchanged
fn validate_id(what: &str, id: &str) -> AuthzResult<()> {
    if !codec::round_trips(id) {
        return Err(AuthzError::validation(format!(
            "{what} ID {id:?} contains reserved character {:?}",
            codec::ENCODED_SEPARATOR
        )));
    }
    Ok(())
}

/// Check that all required fields of a relationship are set.
pub fn validate_relationship(relationship: &Relationship) -> AuthzResult<()> {
    if relationship.entity.entity_type.is_empty() {
        return Err(AuthzError::validation("relationship entity type is missing"));
    }
    if relationship.entity.id.is_empty() {
        return Err(AuthzError::validation("relationship entity ID is missing"));
    }
    validate_id("relationship entity", &relationship.entity.id)?;

    if relationship.relation.is_empty() {
        return Err(AuthzError::validation("relationship relation is missing"));
    }

    if relationship.subject.subject_type.is_empty() {
        return Err(AuthzError::validation("relationship subject type is missing"));
    }
    if relationship.subject.id.is_empty() {
        return Err(AuthzError::validation("relationship subject ID is missing"));
    }
    validate_id("relationship subject", &relationship.subject.id)?;

    Ok(())
}

pub fn validate_add_request(request: &AddRelationshipRequest) -> AuthzResult<()> {
    if request.relationships.is_empty() {
        return Err(AuthzError::validation("request contains no relationships"));
    }
    for (index, relationship) in request.relationships.iter().enumerate() {
        validate_relationship(relationship).map_err(|err| {
            AuthzError::validation(format!("relationship {index} validation failed: {err}"))
        })?;
    }
    Ok(())
}

/// The subject side of a delete filter is optional; it narrows the match.
pub fn validate_delete_request(request: &DeleteRelationshipRequest) -> AuthzResult<()> {
    let filter = &request.filter;
    if filter.entity.entity_type.is_empty() || filter.entity.ids.is_empty() {
        return Err(AuthzError::validation("invalid entity in filter"));
    }
    if filter.relation.is_empty() {
        return Err(AuthzError::validation("relation is not specified in filter"));
    }
    for id in filter.entity.ids.iter() {
        validate_id("filter entity", id)?;
    }
    for id in filter.subject.ids.iter() {
        validate_id("filter subject", id)?;
    }
    Ok(())
}

pub fn validate_permission_check(subject: &Subject, entity: &Entity, permission: &str) -> AuthzResult<()> {
    if entity.id.is_empty() || entity.entity_type.is_empty() {
        return Err(AuthzError::validation("entity is invalid"));
    }
    if subject.id.is_empty() || subject.subject_type.is_empty() {
        return Err(AuthzError::validation("subject is invalid"));
    }
    if permission.is_empty() {
        return Err(AuthzError::validation("permission is invalid"));
    }
    validate_id("entity", &entity.id)?;
    validate_id("subject", &subject.id)?;
    Ok(())
}

pub fn validate_lookup_request(request: &LookupRelationshipRequest) -> AuthzResult<()> {
    if request.entity_type.is_empty() {
        return Err(AuthzError::validation("entity type is invalid"));
    }
    if request.permission.is_empty() {
        return Err(AuthzError::validation("permission is invalid"));
    }
    if request.subject.id.is_empty() || request.subject.subject_type.is_empty() {
        return Err(AuthzError::validation("subject is invalid"));
    }
    validate_id("subject", &request.subject.id)
}

pub fn validate_find_request(request: &FindRelationshipsRequest) -> AuthzResult<()> {
    if request.entity.id.is_empty() || request.entity.entity_type.is_empty() {
        return Err(AuthzError::validation("entity is invalid"));
    }
    if request.permission.is_empty() {
        return Err(AuthzError::validation("permission is invalid"));
    }
    validate_id("entity", &request.entity.id)
}
