//! `audit` command

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::PaydayPaths;
use crate::error::PaydayResult;

/// Format the newest `limit` entries, oldest of them first
pub fn format_audit_entries(entries: &[AuditEntry], limit: usize) -> String {
    let start = entries.len().saturating_sub(limit);

    entries[start..]
        .iter()
        .map(|entry| entry.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show recent changes payday made on disk
pub fn handle_audit(paths: &PaydayPaths, limit: usize) -> PaydayResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_all()?;

    if entries.is_empty() {
        println!("No audit entries in {}", logger.path().display());
        return Ok(());
    }

    println!("{}", format_audit_entries(&entries, limit));
    if entries.len() > limit {
        println!();
        println!("Showing {} of {} entries.", limit, entries.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;
    use serde_json::json;

    fn entry(id: &str) -> AuditEntry {
        AuditEntry::create(EntityType::Goal, id, Some("Trip".into()), &json!({}))
    }

    #[test]
    fn test_format_keeps_newest() {
        let entries = vec![entry("goal-1"), entry("goal-2"), entry("goal-3")];

        let output = format_audit_entries(&entries, 2);

        assert!(!output.contains("goal-1"));
        assert!(output.contains("CREATE Goal goal-2 (Trip)"));
        assert!(output.contains("goal-3"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_format_limit_larger_than_log() {
        let entries = vec![entry("goal-1")];
        assert_eq!(format_audit_entries(&entries, 50).lines().count(), 1);
        assert_eq!(format_audit_entries(&[], 5), "");
    }
}
