//! Hierarchical access control.
//!
//! [`accessible_deals`] is the sole authorization choke point: every
//! deal-listing surface routes through it, and a `false` from
//! [`can_access_deal`] means forbidden/not-found. It is never coerced into
//! a grant.

use crate::error::AccessDenied;
use crate::teams::subtree;
use crate::types::{Deal, Role, Team, User};

/// Decide whether `actor` may see or modify `deal`.
///
/// Admins see everything. A rep sees only deals they own; team membership
/// is irrelevant for reps. A manager sees deals whose team falls inside
/// their own team's subtree; a manager without a team, or a deal without a
/// team, is denied. Fail-closed throughout.
pub fn can_access_deal(actor: &User, deal: &Deal, teams: &[Team]) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Rep => deal.owner_user_id.as_deref() == Some(actor.id.as_str()),
        Role::Manager => match (&actor.team_id, &deal.team_id) {
            (Some(actor_team), Some(deal_team)) => {
                subtree(actor_team, teams).contains(deal_team)
            }
            _ => false,
        },
    }
}

/// Filter `deals` down to those `actor` may access, preserving input order.
pub fn accessible_deals<'a>(actor: &User, deals: &'a [Deal], teams: &[Team]) -> Vec<&'a Deal> {
    deals
        .iter()
        .filter(|d| can_access_deal(actor, d, teams))
        .collect()
}

/// Check access to a single deal, surfacing a denial the caller must treat
/// as forbidden/not-found.
pub fn ensure_access(actor: &User, deal: &Deal, teams: &[Team]) -> Result<(), AccessDenied> {
    if can_access_deal(actor, deal, teams) {
        Ok(())
    } else {
        Err(AccessDenied {
            user_id: actor.id.clone(),
            deal_id: deal.id.clone(),
        })
    }
}

/// Users the actor may hand a deal to.
///
/// Admins pick any active user; a manager picks active users inside their
/// subtree; everyone else gets an empty list.
pub fn assignable_users<'a>(actor: &User, users: &'a [User], teams: &[Team]) -> Vec<&'a User> {
    match actor.role {
        Role::Admin => users.iter().filter(|u| u.active).collect(),
        Role::Manager => match &actor.team_id {
            Some(team_id) => {
                let scope = subtree(team_id, teams);
                users
                    .iter()
                    .filter(|u| u.active && u.team_id.as_ref().is_some_and(|t| scope.contains(t)))
                    .collect()
            }
            None => Vec::new(),
        },
        Role::Rep => Vec::new(),
    }
}

/// Teams the actor may assign a deal to, scoped the same way.
pub fn assignable_teams<'a>(actor: &User, teams: &'a [Team]) -> Vec<&'a Team> {
    match actor.role {
        Role::Admin => teams.iter().collect(),
        Role::Manager => match &actor.team_id {
            Some(team_id) => {
                let scope = subtree(team_id, teams);
                teams.iter().filter(|t| scope.contains(&t.id)).collect()
            }
            None => Vec::new(),
        },
        Role::Rep => Vec::new(),
    }
}
