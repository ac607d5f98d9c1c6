//! Classification tables for the delta synthesizer and health monitor.
//!
//! The keyword groups are configuration data, not branches: extending a
//! group, or swapping the whole table for a smarter classifier, never
//! touches the call sites in `timeline`.

/// Days without an update before an open deal counts as stale.
pub const DEFAULT_STALE_THRESHOLD_DAYS: i64 = 7;

/// One delta signal group: emitted tag, display label, trigger substrings.
///
/// Matching is case-insensitive substring membership over the note text;
/// groups are independently triggerable, so one note can emit several
/// bullets.
pub struct DeltaRule {
    pub tag: &'static str,
    pub label: &'static str,
    pub triggers: &'static [&'static str],
}

/// The seven delta signal groups, in emission order.
pub const DELTA_RULES: &[DeltaRule] = &[
    DeltaRule {
        tag: "timeline",
        label: "Timeline updated",
        triggers: &["timeline", "schedule", "week", "month"],
    },
    DeltaRule {
        tag: "pricing",
        label: "Pricing/Budget mentioned",
        triggers: &["pricing", "budget", "$", "cost"],
    },
    DeltaRule {
        tag: "objection",
        label: "New objection raised",
        triggers: &["objection", "concern", "issue"],
    },
    DeltaRule {
        tag: "nextstep",
        label: "Next step agreed",
        triggers: &["next step", "follow up", "scheduled", "meeting"],
    },
    DeltaRule {
        tag: "stakeholder",
        label: "Stakeholder change",
        triggers: &["champion", "stakeholder", "contact", "vp", "cfo", "cto", "ciso"],
    },
    DeltaRule {
        tag: "demo",
        label: "Demo conducted",
        triggers: &["demo", "presentation"],
    },
    DeltaRule {
        tag: "contract",
        label: "Contract progress",
        triggers: &["contract", "signed", "approved"],
    },
];

/// Fallback bullet when no group matches. Classification never returns an
/// empty set.
pub const UPDATE_TAG: &str = "update";
pub const UPDATE_LABEL: &str = "General update";

/// One snapshot state label with its trigger substrings.
pub struct SnapshotRule {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
}

/// Snapshot label rules. First match wins: a note mentioning both a signed
/// contract and a next step reads as closed.
pub const SNAPSHOT_RULES: &[SnapshotRule] = &[
    SnapshotRule {
        label: "Deal closed.",
        triggers: &["contract signed", "deal closed"],
    },
    SnapshotRule {
        label: "Active engagement.",
        triggers: &["next step"],
    },
    SnapshotRule {
        label: "Addressing concerns.",
        triggers: &["objection", "concern"],
    },
    SnapshotRule {
        label: "In evaluation.",
        triggers: &["demo", "presentation"],
    },
    SnapshotRule {
        label: "Early stage discovery.",
        triggers: &["initial", "discovery"],
    },
];

/// Label when no snapshot rule matches.
pub const SNAPSHOT_DEFAULT_LABEL: &str = "In progress.";

/// Snapshot text for a deal with no recorded memories.
pub const NO_ACTIVITY_SNAPSHOT: &str = "No activity recorded yet.";
