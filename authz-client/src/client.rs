//! HTTP transport shared by every service call

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use shared::Cancellation;
use crate::config::ClientConfig;
use crate::constants::{ApiPath, CONTENT_TYPE_JSON};
use crate::error::{AuthzError, AuthzResult};
use crate::rate_limiter::RateLimiter;

/// Authorization service client over HTTP/JSON.
///
/// Cheap to share behind an `Arc`; all clones of that `Arc` draw from the
/// same rate limiter.
#[derive(Debug)]
pub struct HttpAuthzClient {
    config: ClientConfig,
    http: reqwest::Client,
    limiter: Arc<RateLimiter>,
}

impl HttpAuthzClient {
    /// Create a client with its own HTTP connection pool and rate limiter
    pub fn new(config: ClientConfig) -> AuthzResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Self::with_http_client(config, http)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> AuthzResult<Self> {
        let config = config.normalized()?;
        let limiter = Arc::new(RateLimiter::new(config.rate_limit));

        debug!(
            host = %config.host,
            tenant = %config.tenant,
            rate_limit = config.rate_limit,
            "authorization client configured"
        );

        Ok(Self { config, http, limiter })
    }

    pub fn tenant(&self) -> &str {
        &self.config.tenant
    }

    /// URL of an endpoint scoped to the configured tenant
    pub(crate) fn url(&self, path: ApiPath) -> String {
        self.url_for_tenant(path, &self.config.tenant)
    }

    pub(crate) fn url_for_tenant(&self, path: ApiPath, tenant: &str) -> String {
        format!(
            "{}://{}{}",
            self.config.protocol,
            self.config.host,
            path.render(&self.config.api_version, tenant)
        )
    }

    pub(crate) async fn post<P>(&self, ctx: &Cancellation, url: &str, payload: &P) -> AuthzResult<Vec<u8>>
    where
        P: Serialize + Sync + ?Sized,
    {
        let request = self.http.post(url).json(payload);
        self.execute(ctx, url, request).await
    }

    pub(crate) async fn delete(&self, ctx: &Cancellation, url: &str) -> AuthzResult<Vec<u8>> {
        let request = self.http.delete(url).header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        self.execute(ctx, url, request).await
    }

    /// Every request passes through here: wait for a limiter token, then
    /// send, racing the whole exchange against the run context.
    async fn execute(&self, ctx: &Cancellation, url: &str, request: reqwest::RequestBuilder) -> AuthzResult<Vec<u8>> {
        self.limiter.acquire(ctx).await?;

        debug!(url = %url, "sending request");

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, AuthzError>((status, body))
        };

        let (status, body) = tokio::select! {
            _ = ctx.cancelled() => return Err(AuthzError::Cancelled),
            result = exchange => result?,
        };

        trace!(url = %url, status = %status, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

/// Decode a response body. The HTTP status is not consulted: the service
/// reports failures in the body.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> AuthzResult<T> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        let config = ClientConfig::default().with_host("authz:3476").with_tenant("test");
        let client = HttpAuthzClient::new(config).unwrap();

        assert_eq!(
            client.url(ApiPath::RelationshipWrite),
            "http://authz:3476/v1/tenants/test/relationships/write"
        );
        assert_eq!(
            client.url_for_tenant(ApiPath::TenantDelete, "old"),
            "http://authz:3476/v1/tenants/old"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = HttpAuthzClient::new(ClientConfig::default().with_host(""));
        assert!(matches!(result, Err(AuthzError::Shared(_))));
    }

    #[test]
    fn test_decode_malformed_body() {
        let result: AuthzResult<crate::models::RelationshipSnap> = decode(b"<html>bad gateway</html>");
        assert!(matches!(result, Err(AuthzError::Decode { .. })));
    }
}
