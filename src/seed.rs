//! Deterministic first-run state.
//!
//! The demo dataset the product ships with: one tenant, a four-team
//! hierarchy, seven users across the three roles, and ten deals with a
//! realistic memory trail, including the unassigned and stale deals the
//! assignment monitor exists to surface. Timestamps are day-offsets from
//! the injected `now`, so the seed is reproducible in tests.

use chrono::{DateTime, Duration, Utc};

use crate::types::{AppState, Deal, DealStatus, Memory, Role, Team, Tenant, User};

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

fn user(id: &str, name: &str, email: &str, role: Role, team: Option<&str>, active: bool) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        team_id: team.map(str::to_string),
        active,
    }
}

fn team(id: &str, name: &str, parent: Option<&str>) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        parent_team_id: parent.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    name: &str,
    company: &str,
    owner: Option<&str>,
    team: Option<&str>,
    status: DealStatus,
    updated_at: DateTime<Utc>,
) -> Deal {
    Deal {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        owner_user_id: owner.map(str::to_string),
        team_id: team.map(str::to_string),
        status,
        updated_at,
    }
}

fn memory(id: &str, deal: &str, author: &str, created_at: DateTime<Utc>, text: &str) -> Memory {
    Memory {
        id: id.to_string(),
        deal_id: deal.to_string(),
        author_user_id: author.to_string(),
        created_at,
        raw_text: text.to_string(),
    }
}

/// Build the seed snapshot. `current_user` starts as the admin.
pub fn seed_state(now: DateTime<Utc>) -> AppState {
    let users = vec![
        user("user-1", "Sarah Chen", "sarah.chen@acme.com", Role::Admin, Some("team-1"), true),
        user("user-2", "Marcus Johnson", "marcus.johnson@acme.com", Role::Manager, Some("team-2"), true),
        user("user-3", "Emily Davis", "emily.davis@acme.com", Role::Rep, Some("team-2"), true),
        user("user-4", "James Wilson", "james.wilson@acme.com", Role::Rep, Some("team-3"), true),
        user("user-5", "Lisa Park", "lisa.park@acme.com", Role::Manager, Some("team-3"), true),
        user("user-6", "David Brown", "david.brown@acme.com", Role::Rep, Some("team-2"), false),
        user("user-7", "Rachel Kim", "rachel.kim@acme.com", Role::Rep, Some("team-4"), true),
    ];

    let teams = vec![
        team("team-1", "Executive", None),
        team("team-2", "Enterprise Sales", Some("team-1")),
        team("team-3", "Mid-Market Sales", Some("team-1")),
        team("team-4", "SMB Sales", Some("team-3")),
    ];

    let deals = vec![
        deal("deal-1", "Enterprise Platform License", "TechCorp Industries", Some("user-3"), Some("team-2"), DealStatus::Open, days_ago(now, 1)),
        deal("deal-2", "Annual SaaS Subscription", "Global Finance Ltd", Some("user-3"), Some("team-2"), DealStatus::Open, days_ago(now, 2)),
        deal("deal-3", "Security Suite Upgrade", "SecureNet Systems", Some("user-4"), Some("team-3"), DealStatus::Won, days_ago(now, 5)),
        deal("deal-4", "Data Analytics Platform", "DataFlow Inc", Some("user-4"), Some("team-3"), DealStatus::Open, days_ago(now, 10)),
        deal("deal-5", "Cloud Migration Project", "Legacy Systems Co", Some("user-7"), Some("team-4"), DealStatus::Open, days_ago(now, 3)),
        deal("deal-6", "API Integration Package", "ConnectHub", Some("user-7"), Some("team-4"), DealStatus::Lost, days_ago(now, 15)),
        deal("deal-7", "Starter Plan Upgrade", "GrowthStart LLC", None, Some("team-2"), DealStatus::Open, days_ago(now, 4)),
        deal("deal-8", "Custom Development", "BuildIt Corp", Some("user-3"), None, DealStatus::Open, days_ago(now, 8)),
        deal("deal-9", "Compliance Module", "RegTech Solutions", Some("user-4"), Some("team-3"), DealStatus::Open, days_ago(now, 12)),
        deal("deal-10", "Training Package", "LearnFast Academy", Some("user-7"), Some("team-4"), DealStatus::Open, days_ago(now, 1)),
    ];

    let memories = vec![
        memory("mem-1", "deal-1", "user-3", days_ago(now, 7), "Initial discovery call. Customer is looking for a platform to consolidate their sales tools. Current budget is around $150k annually. Timeline is Q2 next year."),
        memory("mem-2", "deal-1", "user-3", days_ago(now, 4), "Follow up call with their VP of Sales. Main objection is integration complexity with their existing CRM. Champion identified: Director of RevOps."),
        memory("mem-3", "deal-1", "user-3", days_ago(now, 1), "Sent revised pricing proposal. Updated budget to $180k to include premium support. Next step is a technical review meeting scheduled for next week."),
        memory("mem-4", "deal-2", "user-3", days_ago(now, 5), "Demo completed successfully. Finance team was impressed with reporting capabilities. Need to address timeline concerns - they want faster implementation."),
        memory("mem-5", "deal-2", "user-3", days_ago(now, 2), "Timeline adjusted to 6 weeks for implementation. Pricing discussion moved to next call. Champion confirmed as CFO who drove the initial inquiry."),
        memory("mem-6", "deal-3", "user-4", days_ago(now, 12), "Initial contact from their CISO. Current security tools are outdated. Budget approved for modernization."),
        memory("mem-7", "deal-3", "user-4", days_ago(now, 5), "Contract signed. Implementation starts next month. Total deal value $95k."),
        memory("mem-8", "deal-4", "user-4", days_ago(now, 20), "Discovery call. They need a unified analytics solution. Current tools are fragmented across departments."),
        memory("mem-9", "deal-4", "user-4", days_ago(now, 10), "Demo with data team. Some objections around data migration complexity. Need to follow up with migration plan."),
        memory("mem-10", "deal-5", "user-7", days_ago(now, 6), "Initial assessment call. Legacy on-prem infrastructure needs cloud migration. Budget range $200-300k."),
        memory("mem-11", "deal-5", "user-7", days_ago(now, 3), "Technical deep-dive with their IT team. Timeline extended to accommodate security review. Champion is the CTO."),
        memory("mem-12", "deal-10", "user-7", days_ago(now, 3), "Initial call. They need training for 50+ sales reps. Looking at our certification program."),
        memory("mem-13", "deal-10", "user-7", days_ago(now, 1), "Sent pricing for training packages. Budget approved. Next step is to finalize training schedule and materials."),
    ];

    AppState {
        current_user: users[0].clone(),
        tenant: Tenant {
            id: "tenant-1".to_string(),
            name: "Acme Sales".to_string(),
        },
        users,
        teams,
        deals,
        memories,
    }
}
