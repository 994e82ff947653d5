//! Test doubles shared by the churn integration tests

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use authz_client::{AuthzError, AuthzResult, Operation, Relationship};
use churn::RelationshipStore;
use shared::Cancellation;

/// Index a generated tuple belongs to, read from its entity id suffix
pub fn set_index(relationship: &Relationship) -> usize {
    relationship
        .entity
        .id
        .rsplit('.')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .expect("generated ids end in .<index>")
}

/// Store that always succeeds and records every call in order
#[derive(Default)]
pub struct RecordingStore {
    adds: Mutex<Vec<usize>>,
    deletes: Mutex<Vec<Relationship>>,
    fail_add: Option<usize>,
    fail_delete: Option<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding the set with this index fails with a domain error
    pub fn failing_add(index: usize) -> Self {
        Self { fail_add: Some(index), ..Self::default() }
    }

    /// Deleting any tuple of the set with this index fails
    pub fn failing_delete(index: usize) -> Self {
        Self { fail_delete: Some(index), ..Self::default() }
    }

    pub fn adds(&self) -> Vec<usize> {
        self.adds.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<Relationship> {
        self.deletes.lock().unwrap().clone()
    }

    /// Deleted tuples of one set, in the order they were deleted
    pub fn deletes_for(&self, index: usize) -> Vec<Relationship> {
        self.deletes()
            .into_iter()
            .filter(|relationship| set_index(relationship) == index)
            .collect()
    }
}

#[async_trait]
impl RelationshipStore for RecordingStore {
    async fn add(&self, _ctx: &Cancellation, set: &[Relationship]) -> AuthzResult<String> {
        let index = set_index(&set[0]);
        if self.fail_add == Some(index) {
            return Err(AuthzError::domain(Operation::CreateRelationship));
        }
        self.adds.lock().unwrap().push(index);
        Ok(format!("snap-{index}"))
    }

    async fn delete(&self, _ctx: &Cancellation, relationship: &Relationship) -> AuthzResult<()> {
        if self.fail_delete == Some(set_index(relationship)) {
            return Err(AuthzError::domain(Operation::DeleteRelationship));
        }
        self.deletes.lock().unwrap().push(relationship.clone());
        Ok(())
    }
}
