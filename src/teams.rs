//! Team hierarchy resolver.
//!
//! Teams store a child→parent pointer; resolving a subtree scans the team
//! set outward from a frontier until no new team is added. All functions
//! are pure and total: an unknown id yields an empty or singleton result,
//! never an error. A visited set truncates malformed cyclic parent chains
//! instead of looping.

use std::collections::HashSet;

use crate::types::{Deal, Team, User};

/// A team's subtree: itself plus all transitive descendants.
///
/// Total over any input: an id with no matching team yields just
/// `{team_id}`.
pub fn subtree(team_id: &str, teams: &[Team]) -> HashSet<String> {
    let mut collected: HashSet<String> = HashSet::new();
    collected.insert(team_id.to_string());

    let mut frontier: Vec<&str> = vec![team_id];
    while let Some(parent_id) = frontier.pop() {
        for team in teams {
            if team.parent_team_id.as_deref() == Some(parent_id)
                && collected.insert(team.id.clone())
            {
                frontier.push(&team.id);
            }
        }
    }

    collected
}

/// Direct children of a team, in team-collection insertion order.
pub fn children<'a>(team_id: &str, teams: &'a [Team]) -> Vec<&'a Team> {
    teams
        .iter()
        .filter(|t| t.parent_team_id.as_deref() == Some(team_id))
        .collect()
}

/// Teams with no parent, in insertion order.
pub fn roots(teams: &[Team]) -> Vec<&Team> {
    teams.iter().filter(|t| t.parent_team_id.is_none()).collect()
}

/// Look up a team by optional id. Dangling references degrade to `None`
/// ("Unassigned" in the presentation), never an error.
pub fn team_by_id<'a>(team_id: Option<&str>, teams: &'a [Team]) -> Option<&'a Team> {
    let id = team_id?;
    teams.iter().find(|t| t.id == id)
}

/// Look up a user by optional id.
pub fn user_by_id<'a>(user_id: Option<&str>, users: &'a [User]) -> Option<&'a User> {
    let id = user_id?;
    users.iter().find(|u| u.id == id)
}

/// Users directly affiliated with a team. No subtree expansion: a
/// manager's reports in child teams are not members of the parent.
pub fn team_members<'a>(team_id: &str, users: &'a [User]) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| u.team_id.as_deref() == Some(team_id))
        .collect()
}

/// Number of deals assigned directly to a team.
pub fn team_deals_count(team_id: &str, deals: &[Deal]) -> usize {
    deals
        .iter()
        .filter(|d| d.team_id.as_deref() == Some(team_id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, parent: Option<&str>) -> Team {
        Team {
            id: id.to_string(),
            name: id.to_string(),
            parent_team_id: parent.map(str::to_string),
        }
    }

    /// Executive ← {Enterprise, Mid-Market}; SMB under Mid-Market.
    fn forest() -> Vec<Team> {
        vec![
            team("team-1", None),
            team("team-2", Some("team-1")),
            team("team-3", Some("team-1")),
            team("team-4", Some("team-3")),
        ]
    }

    #[test]
    fn test_subtree_of_root_contains_everything() {
        let teams = forest();
        let result = subtree("team-1", &teams);
        assert_eq!(result.len(), 4);
        for t in &teams {
            assert!(result.contains(&t.id));
        }
    }

    #[test]
    fn test_subtree_mid_level() {
        let teams = forest();
        let result = subtree("team-3", &teams);
        assert_eq!(result.len(), 2);
        assert!(result.contains("team-3"));
        assert!(result.contains("team-4"));
        assert!(!result.contains("team-2"));
    }

    #[test]
    fn test_subtree_leaf_is_singleton() {
        let teams = forest();
        assert_eq!(subtree("team-4", &teams).len(), 1);
    }

    #[test]
    fn test_subtree_unknown_id_is_singleton() {
        let teams = forest();
        let result = subtree("team-99", &teams);
        assert_eq!(result.len(), 1);
        assert!(result.contains("team-99"));
    }

    #[test]
    fn test_subtree_equals_children_subtrees_plus_self() {
        let teams = forest();
        for t in &teams {
            let mut expected: HashSet<String> = HashSet::new();
            expected.insert(t.id.clone());
            for child in children(&t.id, &teams) {
                expected.extend(subtree(&child.id, &teams));
            }
            assert_eq!(subtree(&t.id, &teams), expected, "mismatch at {}", t.id);
        }
    }

    #[test]
    fn test_subtree_terminates_on_cycle() {
        // Malformed input: a↔b parent cycle. Traversal truncates rather
        // than looping; both ids end up collected.
        let teams = vec![team("a", Some("b")), team("b", Some("a"))];
        let result = subtree("a", &teams);
        assert_eq!(result.len(), 2);
        assert!(result.contains("a") && result.contains("b"));
    }

    #[test]
    fn test_children_insertion_order() {
        let teams = forest();
        let kids: Vec<&str> = children("team-1", &teams)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(kids, vec!["team-2", "team-3"]);
    }

    #[test]
    fn test_roots() {
        let mut teams = forest();
        teams.push(team("team-5", None));
        let top: Vec<&str> = roots(&teams).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(top, vec!["team-1", "team-5"]);
    }

    #[test]
    fn test_lookups_total_over_dangling_ids() {
        let teams = forest();
        assert!(team_by_id(None, &teams).is_none());
        assert!(team_by_id(Some("nope"), &teams).is_none());
        assert_eq!(team_by_id(Some("team-2"), &teams).unwrap().id, "team-2");
    }

    #[test]
    fn test_team_members_direct_only() {
        let users = vec![
            User {
                id: "u1".to_string(),
                name: "A".to_string(),
                email: "a@acme.com".to_string(),
                role: crate::types::Role::Rep,
                team_id: Some("team-3".to_string()),
                active: true,
            },
            User {
                id: "u2".to_string(),
                name: "B".to_string(),
                email: "b@acme.com".to_string(),
                role: crate::types::Role::Rep,
                team_id: Some("team-4".to_string()),
                active: true,
            },
        ];
        let members = team_members("team-3", &users);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "u1");
    }
}
