//! Pure state reducers.
//!
//! Every mutating action takes the current `AppState` by value and returns
//! the next one: read, compute, replace, nothing patched in place. The
//! `store::StateHandle` applies a reducer as a single atomic replacement,
//! so no reader ever observes a torn mix of old and new fields. Reducers
//! that touch a deal refresh its `updated_at` liveness timestamp.

use chrono::{DateTime, Utc};

use crate::hygiene;
use crate::types::{AppState, Deal, Memory, Role, Team, User};
use crate::util::generate_id;

/// Append a progress note authored by the current user and refresh the
/// deal's liveness timestamp.
pub fn add_memory(state: AppState, deal_id: &str, raw_text: &str, now: DateTime<Utc>) -> AppState {
    let memory = Memory {
        id: generate_id("mem"),
        deal_id: deal_id.to_string(),
        author_user_id: state.current_user.id.clone(),
        created_at: now,
        raw_text: raw_text.to_string(),
    };

    let mut next = state;
    next.memories.push(memory);
    next.deals = next
        .deals
        .into_iter()
        .map(|d| {
            if d.id == deal_id {
                Deal { updated_at: now, ..d }
            } else {
                d
            }
        })
        .collect();
    next
}

/// Assign or clear a deal's owner.
pub fn assign_deal_owner(
    state: AppState,
    deal_id: &str,
    owner: Option<&str>,
    now: DateTime<Utc>,
) -> AppState {
    let mut next = state;
    next.deals = next
        .deals
        .into_iter()
        .map(|d| {
            if d.id == deal_id {
                Deal {
                    owner_user_id: owner.map(str::to_string),
                    updated_at: now,
                    ..d
                }
            } else {
                d
            }
        })
        .collect();
    next
}

/// Assign or clear a deal's team.
pub fn assign_deal_team(
    state: AppState,
    deal_id: &str,
    team: Option<&str>,
    now: DateTime<Utc>,
) -> AppState {
    let mut next = state;
    next.deals = next
        .deals
        .into_iter()
        .map(|d| {
            if d.id == deal_id {
                Deal {
                    team_id: team.map(str::to_string),
                    updated_at: now,
                    ..d
                }
            } else {
                d
            }
        })
        .collect();
    next
}

/// Bulk-reassign selected deals. See [`hygiene::bulk_assign`] for the
/// leave-unchanged rules; unlike the single-deal reducers, bulk assign
/// cannot clear a field.
pub fn bulk_assign_deals(
    state: AppState,
    deal_ids: &[String],
    owner_id: Option<&str>,
    team_id: Option<&str>,
    now: DateTime<Utc>,
) -> AppState {
    let mut next = state;
    next.deals = hygiene::bulk_assign(&next.deals, deal_ids, owner_id, team_id, now);
    next
}

/// Change a user's role.
pub fn change_user_role(state: AppState, user_id: &str, role: Role) -> AppState {
    update_user(state, user_id, |u| u.role = role)
}

/// Move a user to a team, or unaffiliate them.
pub fn assign_user_team(state: AppState, user_id: &str, team_id: Option<&str>) -> AppState {
    let team = team_id.map(str::to_string);
    update_user(state, user_id, move |u| u.team_id = team.clone())
}

/// Flip a user between active and deactivated. Users are never deleted.
pub fn toggle_user_active(state: AppState, user_id: &str) -> AppState {
    update_user(state, user_id, |u| u.active = !u.active)
}

/// Invite a user. New users start active.
pub fn add_user(
    state: AppState,
    name: &str,
    email: &str,
    role: Role,
    team_id: Option<&str>,
) -> AppState {
    let user = User {
        id: generate_id("user"),
        name: name.to_string(),
        email: email.to_string(),
        role,
        team_id: team_id.map(str::to_string),
        active: true,
    };
    let mut next = state;
    next.users.push(user);
    next
}

/// Create a team, optionally under a parent. A fresh team has no children
/// and nothing pointing at it, so creation can never close a parent cycle.
pub fn add_team(state: AppState, name: &str, parent_team_id: Option<&str>) -> AppState {
    let team = Team {
        id: generate_id("team"),
        name: name.to_string(),
        parent_team_id: parent_team_id.map(str::to_string),
    };
    let mut next = state;
    next.teams.push(team);
    next
}

/// Apply an edit to the matching roster entry, keeping `current_user` in
/// sync when the acting user edits themselves, so the stored actor never
/// drifts from the roster.
fn update_user(state: AppState, user_id: &str, f: impl Fn(&mut User)) -> AppState {
    let mut next = state;
    for user in next.users.iter_mut() {
        if user.id == user_id {
            f(user);
        }
    }
    if next.current_user.id == user_id {
        if let Some(updated) = next.users.iter().find(|u| u.id == user_id) {
            next.current_user = updated.clone();
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_state;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn state() -> AppState {
        seed_state(now())
    }

    #[test]
    fn test_add_memory_appends_and_refreshes_deal() {
        let later = now() + Duration::hours(1);
        let before = state();
        let memory_count = before.memories.len();

        let next = add_memory(before, "deal-4", "Champion went quiet.", later);

        assert_eq!(next.memories.len(), memory_count + 1);
        let added = next.memories.last().unwrap();
        assert_eq!(added.deal_id, "deal-4");
        assert_eq!(added.author_user_id, next.current_user.id);
        assert_eq!(added.created_at, later);

        let touched = next.deals.iter().find(|d| d.id == "deal-4").unwrap();
        assert_eq!(touched.updated_at, later);
        // Only the annotated deal moves
        let untouched = next.deals.iter().find(|d| d.id == "deal-5").unwrap();
        assert!(untouched.updated_at < later);
    }

    #[test]
    fn test_assign_deal_owner_set_and_clear() {
        let next = assign_deal_owner(state(), "deal-7", Some("user-4"), now());
        let d = next.deals.iter().find(|d| d.id == "deal-7").unwrap();
        assert_eq!(d.owner_user_id.as_deref(), Some("user-4"));
        assert_eq!(d.updated_at, now());

        let cleared = assign_deal_owner(next, "deal-7", None, now());
        let d = cleared.deals.iter().find(|d| d.id == "deal-7").unwrap();
        assert_eq!(d.owner_user_id, None);
    }

    #[test]
    fn test_assign_deal_team() {
        let next = assign_deal_team(state(), "deal-8", Some("team-2"), now());
        let d = next.deals.iter().find(|d| d.id == "deal-8").unwrap();
        assert_eq!(d.team_id.as_deref(), Some("team-2"));
    }

    #[test]
    fn test_bulk_assign_reducer_delegates() {
        let ids = vec!["deal-7".to_string(), "deal-8".to_string()];
        let next = bulk_assign_deals(state(), &ids, Some("user-4"), None, now());
        for id in ["deal-7", "deal-8"] {
            let d = next.deals.iter().find(|d| d.id == id).unwrap();
            assert_eq!(d.owner_user_id.as_deref(), Some("user-4"));
            assert_eq!(d.updated_at, now());
        }
    }

    #[test]
    fn test_change_user_role() {
        let next = change_user_role(state(), "user-3", Role::Manager);
        let u = next.users.iter().find(|u| u.id == "user-3").unwrap();
        assert_eq!(u.role, Role::Manager);
    }

    #[test]
    fn test_self_edit_refreshes_current_user() {
        let before = state();
        let actor_id = before.current_user.id.clone();
        assert_eq!(before.current_user.role, Role::Admin);

        let next = change_user_role(before, &actor_id, Role::Rep);
        assert_eq!(next.current_user.role, Role::Rep);
    }

    #[test]
    fn test_toggle_user_active_flips() {
        let next = toggle_user_active(state(), "user-6");
        assert!(next.users.iter().find(|u| u.id == "user-6").unwrap().active);
        let again = toggle_user_active(next, "user-6");
        assert!(!again.users.iter().find(|u| u.id == "user-6").unwrap().active);
    }

    #[test]
    fn test_add_user_starts_active() {
        let next = add_user(state(), "Noah Reed", "noah.reed@acme.com", Role::Rep, Some("team-4"));
        let added = next.users.last().unwrap();
        assert!(added.active);
        assert_eq!(added.role, Role::Rep);
        assert_eq!(added.team_id.as_deref(), Some("team-4"));
        assert!(added.id.starts_with("user-"));
    }

    #[test]
    fn test_add_team_under_parent() {
        let before = state();
        let team_count = before.teams.len();
        let next = add_team(before, "Inside Sales", Some("team-2"));
        assert_eq!(next.teams.len(), team_count + 1);
        let added = next.teams.last().unwrap();
        assert_eq!(added.parent_team_id.as_deref(), Some("team-2"));
    }

    #[test]
    fn test_reducers_do_not_touch_unrelated_collections() {
        let before = state();
        let users_before = before.users.clone();
        let teams_before = before.teams.clone();
        let next = add_memory(before, "deal-1", "note", now());
        assert_eq!(next.users, users_before);
        assert_eq!(next.teams, teams_before);
    }
}
