//! Wire constants and endpoint paths

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Value returned by the service when a permission check is granted
pub const CHECK_RESULT_ALLOWED: &str = "CHECK_RESULT_ALLOWED";

/// Depth limit sent with permission graph queries. The schema is only a
/// few levels deep, so this is never the binding constraint.
pub const MAX_QUERY_DEPTH: u32 = 100;

/// Service endpoints relative to `<protocol>://<host>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiPath {
    SchemaWrite,
    TenantCreate,
    TenantDelete,
    TenantList,
    PermissionCheck,
    RelationshipWrite,
    RelationshipDelete,
    LookupEntity,
    Expand,
}

impl ApiPath {
    /// Render the path. `tenant` is ignored by the tenant-management
    /// endpoints that aren't scoped to one; `TenantDelete` uses it as the
    /// tenant being deleted.
    pub fn render(&self, api_version: &str, tenant: &str) -> String {
        match self {
            ApiPath::SchemaWrite => format!("/{api_version}/tenants/{tenant}/schemas/write"),
            ApiPath::TenantCreate => format!("/{api_version}/tenants/create"),
            ApiPath::TenantDelete => format!("/{api_version}/tenants/{tenant}"),
            ApiPath::TenantList => format!("/{api_version}/tenants/list"),
            ApiPath::PermissionCheck => format!("/{api_version}/tenants/{tenant}/permissions/check"),
            ApiPath::RelationshipWrite => format!("/{api_version}/tenants/{tenant}/relationships/write"),
            ApiPath::RelationshipDelete => format!("/{api_version}/tenants/{tenant}/relationships/delete"),
            ApiPath::LookupEntity => format!("/{api_version}/tenants/{tenant}/permissions/lookup-entity"),
            ApiPath::Expand => format!("/{api_version}/tenants/{tenant}/permissions/expand"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_scoped_paths() {
        assert_eq!(
            ApiPath::RelationshipWrite.render("v1", "test"),
            "/v1/tenants/test/relationships/write"
        );
        assert_eq!(
            ApiPath::RelationshipDelete.render("v1", "test"),
            "/v1/tenants/test/relationships/delete"
        );
        assert_eq!(
            ApiPath::LookupEntity.render("v1", "test"),
            "/v1/tenants/test/permissions/lookup-entity"
        );
    }

    #[test]
    fn test_tenant_management_paths() {
        assert_eq!(ApiPath::TenantCreate.render("v1", "ignored"), "/v1/tenants/create");
        assert_eq!(ApiPath::TenantList.render("v1", "ignored"), "/v1/tenants/list");
        assert_eq!(ApiPath::TenantDelete.render("v1", "t9"), "/v1/tenants/t9");
    }
}
