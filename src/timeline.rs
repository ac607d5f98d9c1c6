//! Memory timeline and delta synthesis.
//!
//! A deal's memory history is an append-only log replayed into two
//! projections: per-note delta bullets and a one-sentence current-state
//! snapshot derived from the latest note. Both are stateless transforms
//! over an immutable memory slice.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{
    DELTA_RULES, NO_ACTIVITY_SNAPSHOT, SNAPSHOT_DEFAULT_LABEL, SNAPSHOT_RULES, UPDATE_LABEL,
    UPDATE_TAG,
};
use crate::types::{DeltaBullet, Memory};

/// A deal's memories in chronological order.
///
/// The sort is stable: memories sharing a timestamp keep their insertion
/// order across recomputations.
pub fn ordered_history<'a>(deal_id: &str, memories: &'a [Memory]) -> Vec<&'a Memory> {
    let mut history: Vec<&Memory> = memories.iter().filter(|m| m.deal_id == deal_id).collect();
    history.sort_by_key(|m| m.created_at);
    history
}

/// Classify the signals present in a memory.
///
/// The contract is "signals present in the latest note", not a text diff:
/// `previous` is accepted for forward compatibility but does not influence
/// the result. Never returns an empty set: a note matching no group emits
/// the single "General update" bullet.
pub fn classify(current: &Memory, _previous: Option<&Memory>) -> Vec<DeltaBullet> {
    let text = current.raw_text.to_lowercase();

    let mut bullets: Vec<DeltaBullet> = DELTA_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|kw| text.contains(kw)))
        .map(|rule| DeltaBullet {
            kind: rule.tag.to_string(),
            text: rule.label.to_string(),
        })
        .collect();

    if bullets.is_empty() {
        bullets.push(DeltaBullet {
            kind: UPDATE_TAG.to_string(),
            text: UPDATE_LABEL.to_string(),
        });
    }

    bullets
}

fn sentence_splitter() -> &'static Regex {
    static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
    SENTENCE_RE
        .get_or_init(|| Regex::new(r"[.!?]+").expect("sentence splitter regex must compile"))
}

/// Synthesize a one-line current-state description from a chronological
/// history, as produced by [`ordered_history`].
///
/// Only the most recent memory is inspected: its first sentence is quoted
/// behind a state label chosen by first-matching priority over the full
/// note text.
pub fn snapshot(history: &[&Memory]) -> String {
    let last = match history.last() {
        Some(m) => m,
        None => return NO_ACTIVITY_SNAPSHOT.to_string(),
    };

    let first_sentence = sentence_splitter()
        .split(&last.raw_text)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("");

    let text = last.raw_text.to_lowercase();
    let label = SNAPSHOT_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|kw| text.contains(kw)))
        .map(|rule| rule.label)
        .unwrap_or(SNAPSHOT_DEFAULT_LABEL);

    format!("Current state: {} {}", label, first_sentence)
}
