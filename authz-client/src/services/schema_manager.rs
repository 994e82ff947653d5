//! Tenant and schema administration

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::info;
use uuid::Uuid;

use shared::Cancellation;
use crate::client::{decode, HttpAuthzClient};
use crate::constants::ApiPath;
use crate::error::{AuthzError, AuthzResult, Operation};
use crate::requests::{
    CreateTenantRequest, CreateTenantResponse, DeleteTenantResponse, ListTenantsRequest, ListTenantsResponse,
    SaveSchemaRequest, SaveSchemaResponse,
};
use crate::traits::SchemaManagerClient;

#[async_trait]
impl SchemaManagerClient for HttpAuthzClient {
    async fn create_tenant(
        &self,
        ctx: &Cancellation,
        mut tenant: CreateTenantRequest,
    ) -> AuthzResult<CreateTenantResponse> {
        if tenant.name.is_empty() {
            tenant.name = self.tenant().to_string();
        }
        if tenant.id.is_empty() {
            tenant.id = Uuid::new_v4().to_string();
        }
        if tenant.created_at.is_empty() {
            tenant.created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        }

        let url = self.url(ApiPath::TenantCreate);
        let body = self.post(ctx, &url, &tenant).await?;
        let response: CreateTenantResponse = decode(&body)?;

        if response.error.has_error_code() {
            return Err(AuthzError::rejected(Operation::CreateTenant, &response.error));
        }

        info!(tenant = %tenant.name, id = %tenant.id, "tenant created");
        Ok(response)
    }

    async fn delete_tenant(&self, ctx: &Cancellation, tenant_id: &str) -> AuthzResult<DeleteTenantResponse> {
        let url = self.url_for_tenant(ApiPath::TenantDelete, tenant_id);
        let body = self.delete(ctx, &url).await?;
        let response: DeleteTenantResponse = decode(&body)?;

        if response.error.has_error_code() {
            return Err(AuthzError::rejected(Operation::DeleteTenant, &response.error));
        }

        info!(tenant = %tenant_id, "tenant deleted");
        Ok(response)
    }

    async fn list_tenants(&self, ctx: &Cancellation, request: &ListTenantsRequest) -> AuthzResult<ListTenantsResponse> {
        let url = self.url(ApiPath::TenantList);
        let body = self.post(ctx, &url, request).await?;
        let response: ListTenantsResponse = decode(&body)?;

        if response.error.has_error_code() {
            return Err(AuthzError::rejected(Operation::ListTenants, &response.error));
        }

        Ok(response)
    }

    async fn save_model_schema(&self, ctx: &Cancellation, request: &SaveSchemaRequest) -> AuthzResult<SaveSchemaResponse> {
        let url = self.url(ApiPath::SchemaWrite);
        let body = self.post(ctx, &url, request).await?;
        let response: SaveSchemaResponse = decode(&body)?;

        if response.error.has_error_code() {
            return Err(AuthzError::rejected(Operation::WriteSchema, &response.error));
        }

        info!(schema_version = %response.schema_version, "model schema saved");
        Ok(response)
    }
}
