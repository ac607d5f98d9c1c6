//! Small shared helpers: id generation, relative date display, atomic
//! file writes.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Mint a prefixed, collision-resistant id, e.g. `deal-5e1c…`.
///
/// Uniqueness within the process lifetime is the whole contract; the exact
/// format is not load-bearing.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Human-relative date for list columns: "Today", "Yesterday",
/// "4 days ago", then "Mar 3, 2026" past a week.
pub fn format_relative_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - timestamp).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d @ 2..=6 => format!("{} days ago", d),
        _ => timestamp.format("%b %-d, %Y").to_string(),
    }
}

/// Write a file via a temp sibling + rename so readers never observe a
/// partial write and a failed write leaves the previous content intact.
pub fn atomic_write_str(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generate_id_prefix_and_uniqueness() {
        let ids: HashSet<String> = (0..100).map(|_| generate_id("deal")).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.starts_with("deal-")));
    }

    #[test]
    fn test_format_relative_date_buckets() {
        assert_eq!(format_relative_date(now(), now()), "Today");
        assert_eq!(
            format_relative_date(now() - Duration::hours(12), now()),
            "Today"
        );
        assert_eq!(
            format_relative_date(now() - Duration::days(1), now()),
            "Yesterday"
        );
        assert_eq!(
            format_relative_date(now() - Duration::days(4), now()),
            "4 days ago"
        );
        assert_eq!(
            format_relative_date(now() - Duration::days(7), now()),
            "Mar 3, 2026"
        );
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        atomic_write_str(&path, "first").unwrap();
        atomic_write_str(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
