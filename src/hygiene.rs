//! Assignment health monitoring.
//!
//! Flags deals missing an owner or team, or open deals gone quiet past a
//! threshold, and repairs them through bulk reassignment. Detection reads
//! an immutable snapshot; [`bulk_assign`] returns a new deal collection
//! computed in a single pass with one shared timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STALE_THRESHOLD_DAYS;
use crate::types::{Deal, DealStatus};

/// Why a deal needs attention. A deal may carry several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DealIssue {
    NoOwner,
    NoTeam,
    Stale,
}

impl DealIssue {
    /// Short display tag for assignment tables.
    pub fn label(&self) -> &'static str {
        match self {
            DealIssue::NoOwner => "No owner",
            DealIssue::NoTeam => "No team",
            DealIssue::Stale => "Stale",
        }
    }
}

/// Whole elapsed days since `updated_at` meet or exceed the threshold.
///
/// Day counting truncates: 6 days 23 hours is 6 whole days, not stale at
/// a 7-day threshold; exactly 7 days is.
pub fn is_stale(updated_at: DateTime<Utc>, now: DateTime<Utc>, threshold_days: i64) -> bool {
    (now - updated_at).num_days() >= threshold_days
}

/// All issues applying to a deal, in report order. Staleness only applies
/// to open deals; a won or lost deal is allowed to rest.
pub fn deal_issues(deal: &Deal, now: DateTime<Utc>) -> Vec<DealIssue> {
    let mut issues = Vec::new();
    if deal.owner_user_id.is_none() {
        issues.push(DealIssue::NoOwner);
    }
    if deal.team_id.is_none() {
        issues.push(DealIssue::NoTeam);
    }
    if deal.status == DealStatus::Open
        && is_stale(deal.updated_at, now, DEFAULT_STALE_THRESHOLD_DAYS)
    {
        issues.push(DealIssue::Stale);
    }
    issues
}

/// Deals needing attention, input order preserved.
///
/// Filtering is a fixed point: re-applying it to its own output changes
/// nothing.
pub fn problem_deals<'a>(deals: &'a [Deal], now: DateTime<Utc>) -> Vec<&'a Deal> {
    deals
        .iter()
        .filter(|d| !deal_issues(d, now).is_empty())
        .collect()
}

/// Summary counts for the assignment surface. A deal with several issues
/// counts once per issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReport {
    pub missing_owner: usize,
    pub missing_team: usize,
    pub stale_open: usize,
    pub scanned_at: String,
}

/// Scan a deal set (typically the actor's accessible deals) into the
/// summary the assignment surface shows.
pub fn assignment_report(deals: &[&Deal], now: DateTime<Utc>) -> AssignmentReport {
    let mut report = AssignmentReport {
        scanned_at: now.to_rfc3339(),
        ..Default::default()
    };

    for deal in deals {
        if deal.owner_user_id.is_none() {
            report.missing_owner += 1;
        }
        if deal.team_id.is_none() {
            report.missing_team += 1;
        }
        if deal.status == DealStatus::Open
            && is_stale(deal.updated_at, now, DEFAULT_STALE_THRESHOLD_DAYS)
        {
            report.stale_open += 1;
        }
    }

    report
}

/// Reassign a set of deals in one pass.
///
/// `owner_id`/`team_id` of `None` mean "leave unchanged"; bulk assign has
/// no way to clear an assignment. Every selected deal gets the same `now`;
/// deals outside `deal_ids` come back untouched, timestamps included.
pub fn bulk_assign(
    deals: &[Deal],
    deal_ids: &[String],
    owner_id: Option<&str>,
    team_id: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<Deal> {
    deals
        .iter()
        .map(|deal| {
            if !deal_ids.iter().any(|id| id == &deal.id) {
                return deal.clone();
            }
            let mut updated = deal.clone();
            if let Some(owner) = owner_id {
                updated.owner_user_id = Some(owner.to_string());
            }
            if let Some(team) = team_id {
                updated.team_id = Some(team.to_string());
            }
            updated.updated_at = now;
            updated
        })
        .collect()
}
