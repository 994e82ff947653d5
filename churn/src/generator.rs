//! Deterministic relationship set generation
//!
//! Set `i` links `user.i`, `organization.i`, `team.i` and `project.i`
//! through a fixed seven-tuple template. The tuple order matters: sets are
//! deleted in reverse.

use authz_client::{Entity, Relationship, Subject};

pub const USER: &str = "user";
pub const ORGANIZATION: &str = "organization";
pub const TEAM: &str = "team";
pub const PROJECT: &str = "project";

pub const ROLE_ORG: &str = "org";
pub const ROLE_OWNER: &str = "owner";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";
pub const ROLE_TEAM: &str = "team";

/// Tuples in every set
pub const SET_SIZE: usize = 7;

pub type RelationshipSet = Vec<Relationship>;

/// `n` sets for the global indices `start..start + n`, stopping short at
/// `usize::MAX`
pub fn generate(start: usize, n: usize) -> Vec<RelationshipSet> {
    (start..start.saturating_add(n)).map(make_relationships).collect()
}

pub fn entity_id(kind: &str, index: usize) -> String {
    format!("{kind}.{index}")
}

fn tuple(entity_kind: &str, relation: &str, subject_kind: &str, index: usize) -> Relationship {
    Relationship::new(
        Entity::new(entity_kind, entity_id(entity_kind, index)),
        relation,
        Subject::new(subject_kind, entity_id(subject_kind, index)),
    )
}

pub fn make_relationships(index: usize) -> RelationshipSet {
    vec![
        tuple(ORGANIZATION, ROLE_ADMIN, USER, index),
        tuple(ORGANIZATION, ROLE_MEMBER, USER, index),
        tuple(TEAM, ROLE_ORG, ORGANIZATION, index),
        tuple(TEAM, ROLE_OWNER, USER, index),
        tuple(TEAM, ROLE_MEMBER, USER, index),
        tuple(PROJECT, ROLE_ORG, ORGANIZATION, index),
        tuple(PROJECT, ROLE_TEAM, TEAM, index),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use authz_client::validation::validate_relationship;

    #[test]
    fn test_generation_is_deterministic() {
        for index in [0, 1, 42, 9_999] {
            assert_eq!(make_relationships(index), make_relationships(index));
        }
        assert_eq!(generate(3, 5), generate(3, 5));
    }

    #[test]
    fn test_template() {
        let set = make_relationships(7);
        assert_eq!(set.len(), SET_SIZE);

        let rendered: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "organization:organization.7 -> admin -> user:user.7",
                "organization:organization.7 -> member -> user:user.7",
                "team:team.7 -> org -> organization:organization.7",
                "team:team.7 -> owner -> user:user.7",
                "team:team.7 -> member -> user:user.7",
                "project:project.7 -> org -> organization:organization.7",
                "project:project.7 -> team -> team:team.7",
            ]
        );
    }

    #[test]
    fn test_generate_offsets_from_start() {
        let sets = generate(10, 3);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0], make_relationships(10));
        assert_eq!(sets[2], make_relationships(12));
        assert!(generate(0, 0).is_empty());
    }

    #[test]
    fn test_generate_near_index_limit() {
        assert!(generate(usize::MAX, 1).is_empty());

        let sets = generate(usize::MAX - 2, 5);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[1], make_relationships(usize::MAX - 1));
    }

    #[test]
    fn test_generated_tuples_are_valid() {
        for relationship in make_relationships(5) {
            assert!(validate_relationship(&relationship).is_ok(), "{relationship}");
        }
    }
}
