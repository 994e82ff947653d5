//! Aggregate throughput of one client shared by many tasks

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use authz_client::{AddRelationshipRequest, RelationshipClient};
use common::{client_with_rate, sample_relationship};
use shared::Cancellation;

#[tokio::test]
async fn test_back_to_back_requests_respect_rate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snap_token": "t"})))
        .expect(5)
        .mount(&server)
        .await;

    let client = client_with_rate(&server, 20);
    let ctx = Cancellation::new();
    let request = AddRelationshipRequest::new(vec![sample_relationship()]);

    let start = Instant::now();
    for _ in 0..5 {
        client.add_relationship(&ctx, &request).await.unwrap();
    }

    // (M - 1) / R = 4 / 20
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_concurrent_tasks_share_one_bucket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snap_token": "t"})))
        .expect(6)
        .mount(&server)
        .await;

    let client = Arc::new(client_with_rate(&server, 25));
    let ctx = Cancellation::new();

    let start = Instant::now();
    let mut handles = Vec::new();
    for _ in 0..6 {
        let client = client.clone();
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            let request = AddRelationshipRequest::new(vec![sample_relationship()]);
            client.add_relationship(&ctx, &request).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 5 / 25
    assert!(start.elapsed() >= Duration::from_millis(200));
}
