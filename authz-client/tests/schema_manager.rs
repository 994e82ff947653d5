//! Tenant and schema administration against a mock authorization service

mod common;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use authz_client::{
    AuthzError, CreateTenantRequest, ListTenantsRequest, Operation, SaveSchemaRequest, SchemaManagerClient,
};
use common::{client_for, TEST_TENANT};
use shared::Cancellation;

#[tokio::test]
async fn test_create_tenant_fills_blank_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tenants/create"))
        .and(body_partial_json(json!({"tenant": TEST_TENANT})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tenant": {"id": "abc", "tenant": TEST_TENANT, "created_at": "2024-01-01T00:00:00Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .create_tenant(&Cancellation::new(), CreateTenantRequest::default())
        .await
        .unwrap();
    assert_eq!(response.tenant.unwrap().name, TEST_TENANT);

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = requests[0].body_json().unwrap();
    assert!(!sent["id"].as_str().unwrap().is_empty());
    assert!(sent["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_tenant_keeps_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tenants/create"))
        .and(body_partial_json(json!({"id": "fixed", "tenant": "other"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tenant = CreateTenantRequest {
        id: "fixed".to_string(),
        name: "other".to_string(),
        ..Default::default()
    };
    client.create_tenant(&Cancellation::new(), tenant).await.unwrap();
}

#[tokio::test]
async fn test_create_tenant_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tenants/create"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": 6,
            "message": "ERROR_CODE_ALREADY_EXIST"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .create_tenant(&Cancellation::new(), CreateTenantRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthzError::Domain { operation: Operation::CreateTenant, code: Some(6), .. }));
}

#[tokio::test]
async fn test_zero_error_code_is_not_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tenants/test/schemas/write"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "schema_version": "cn1v3l5"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .save_model_schema(&Cancellation::new(), &SaveSchemaRequest::new("entity user {}"))
        .await
        .unwrap();
    assert_eq!(response.schema_version, "cn1v3l5");
}

#[tokio::test]
async fn test_save_model_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tenants/test/schemas/write"))
        .and(body_partial_json(json!({"schema": "entity user {"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 3,
            "message": "ERROR_CODE_PARSER"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .save_model_schema(&Cancellation::new(), &SaveSchemaRequest::new("entity user {"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "failed to update model (code 3: ERROR_CODE_PARSER)");
}

#[tokio::test]
async fn test_list_tenants() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tenants/list"))
        .and(body_partial_json(json!({"page_size": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tenants": [
                {"id": "t1", "tenant": "first"},
                {"id": "t2", "tenant": "second"}
            ],
            "continuous_token": "next"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListTenantsRequest { page_size: 10, ..Default::default() };
    let response = client.list_tenants(&Cancellation::new(), &request).await.unwrap();

    let names: Vec<_> = response.tenants.iter().map(|tenant| tenant.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(response.continuous_token, "next");
}

#[tokio::test]
async fn test_delete_tenant_uses_delete_method() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/tenants/old"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tenant": {"id": "old", "tenant": "old"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.delete_tenant(&Cancellation::new(), "old").await.unwrap();
    assert_eq!(response.tenant.unwrap().id, "old");
}
