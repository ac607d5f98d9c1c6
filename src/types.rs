//! Core entity records for the deal-memory domain.
//!
//! Every record is an immutable value: the reducers in `commands` build a
//! new `AppState` instead of patching fields in place. Wire format
//! (camelCase keys, SCREAMING enum strings) matches the persisted snapshot
//! layout, so existing state blobs keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actor role. Access decisions match exhaustively on this enum, so adding
/// a role is a compile-checked change everywhere access is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Rep,
}

/// Deal lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealStatus {
    Open,
    Won,
    Lost,
}

/// One tenant per deployment; static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

/// A selectable actor. Users are never deleted; deactivation flips
/// `active` and keeps historical references intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// A user may be unaffiliated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub active: bool,
}

/// Node in the team forest: at most one parent, `None` means root.
/// Teams are never deleted or re-parented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_team_id: Option<String>,
}

/// A tracked sales opportunity. Unassigned owner/team states are valid and
/// meaningful, not errors. The assignment monitor exists to find them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub status: DealStatus,
    /// Liveness signal: refreshed whenever a memory lands or an assignment
    /// changes. Monotonically non-decreasing under normal operation.
    pub updated_at: DateTime<Utc>,
}

/// Append-only progress note. Once created, immutable; the ordered sequence
/// of a deal's memories is the only source of truth for its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    pub deal_id: String,
    pub author_user_id: String,
    pub created_at: DateTime<Utc>,
    pub raw_text: String,
}

/// Derived "what changed" signal for one note. Recomputed on demand from
/// the memory log, never stored in `AppState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaBullet {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Aggregate root and unit of persistence. `current_user` holds the full
/// selected-actor value, mirroring the snapshot layout the shell persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_user: User,
    pub tenant: Tenant,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub deals: Vec<Deal>,
    pub memories: Vec<Memory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"MANAGER\"");
        assert_eq!(serde_json::from_str::<Role>("\"REP\"").unwrap(), Role::Rep);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&DealStatus::Open).unwrap(), "\"OPEN\"");
        assert_eq!(
            serde_json::from_str::<DealStatus>("\"LOST\"").unwrap(),
            DealStatus::Lost
        );
    }

    #[test]
    fn test_deal_camel_case_and_optional_fields() {
        let deal = Deal {
            id: "deal-1".to_string(),
            name: "Enterprise Platform License".to_string(),
            company: "TechCorp Industries".to_string(),
            owner_user_id: None,
            team_id: Some("team-2".to_string()),
            status: DealStatus::Open,
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&deal).unwrap();
        assert_eq!(json["teamId"], "team-2");
        assert_eq!(json["updatedAt"], "2026-03-01T12:00:00Z");
        // Absent owner serializes as a missing key, not null
        assert!(json.get("ownerUserId").is_none());
    }

    #[test]
    fn test_deal_deserializes_without_optionals() {
        let deal: Deal = serde_json::from_str(
            r#"{"id":"d1","name":"n","company":"c","status":"OPEN","updatedAt":"2026-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(deal.owner_user_id, None);
        assert_eq!(deal.team_id, None);
    }

    #[test]
    fn test_delta_bullet_type_key() {
        let bullet = DeltaBullet {
            kind: "pricing".to_string(),
            text: "Pricing/Budget mentioned".to_string(),
        };
        let json = serde_json::to_value(&bullet).unwrap();
        assert_eq!(json["type"], "pricing");
        assert_eq!(json["text"], "Pricing/Budget mentioned");
    }
}
