//! Shared fixtures for client integration tests

#![allow(dead_code)]

use authz_client::{ClientConfig, Entity, HttpAuthzClient, Relationship, Subject};
use wiremock::MockServer;

pub const TEST_TENANT: &str = "test";

/// Client pointed at the mock server, fast enough that the limiter is
/// not what the test is measuring
pub fn client_for(server: &MockServer) -> HttpAuthzClient {
    client_with_rate(server, 1000)
}

pub fn client_with_rate(server: &MockServer, rate_limit: u32) -> HttpAuthzClient {
    let config = ClientConfig::default()
        .with_host(server.address().to_string())
        .with_tenant(TEST_TENANT)
        .with_rate_limit(rate_limit);
    HttpAuthzClient::new(config).expect("test client config is valid")
}

pub fn sample_relationship() -> Relationship {
    Relationship::new(Entity::new("doc", "doc.1"), "owner", Subject::new("user", "user.1"))
}
