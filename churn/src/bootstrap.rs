//! One-time tenant and schema setup before the churn loop

use tracing::info;

use authz_client::{CreateTenantRequest, SaveSchemaRequest, SchemaManagerClient};
use shared::Cancellation;

use crate::error::{ChurnError, ChurnResult};

/// Model covering every entity and relation the generator emits
pub const TEST_SCHEMA: &str = r#"
entity user {}

entity organization {

	// organizational roles
	relation admin @user
	relation member @user

}

entity team {
	// reference for organization that team belong
	relation org @organization

	// represents owner or creator of the team
	relation owner @user

	// represents direct member of the team
	relation member @user

	// organization admins or owners can edit, delete the team details
	permission edit = org.admin or owner
	permission delete = org.admin or owner

	// to invite someone you need to be admin and either owner or member of this team
	permission invite = org.admin and (owner or member)

	// only owners can remove users
	permission remove_user =  owner
}

entity project {

	// references for team and organization that project belongs
	relation team @team
	relation org @organization

	permission view = org.admin or team.member
	permission edit = org.admin or team.member
	permission delete = team.member
}
"#;

/// Create the tenant, then write the model schema into it.
pub async fn bootstrap<C>(client: &C, ctx: &Cancellation, tenant: &str) -> ChurnResult<()>
where
    C: SchemaManagerClient + ?Sized,
{
    let request = CreateTenantRequest {
        name: tenant.to_string(),
        ..Default::default()
    };
    client
        .create_tenant(ctx, request)
        .await
        .map_err(|source| ChurnError::Setup { step: "creating tenant", source })?;

    let saved = client
        .save_model_schema(ctx, &SaveSchemaRequest::new(TEST_SCHEMA))
        .await
        .map_err(|source| ChurnError::Setup { step: "saving schema", source })?;

    info!(tenant = %tenant, schema_version = %saved.schema_version, "tenant ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{make_relationships, ORGANIZATION, PROJECT, TEAM, USER};

    #[test]
    fn test_schema_declares_generated_relations() {
        for kind in [USER, ORGANIZATION, TEAM, PROJECT] {
            assert!(TEST_SCHEMA.contains(&format!("entity {kind} ")), "missing entity {kind}");
        }
        for relationship in make_relationships(0) {
            let declaration = format!("relation {} @{}", relationship.relation, relationship.subject.subject_type);
            assert!(TEST_SCHEMA.contains(&declaration), "missing {declaration}");
        }
    }
}
