//! Blueprint loading shared by the commands
//!
//! Loading applies the monthly goal refresh; refreshed goals are written
//! back to the blueprint and recorded in the audit log.

use chrono::{DateTime, Utc};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::PaydayPaths;
use crate::error::PaydayResult;
use crate::models::FundingItemId;
use crate::services::refresh_goals;
use crate::storage::{Blueprint, BlueprintStore};

/// Load the blueprint as of `now`, persisting any goal refresh
pub fn load_blueprint(
    paths: &PaydayPaths,
    store: &BlueprintStore,
    now: DateTime<Utc>,
) -> PaydayResult<Blueprint> {
    let mut blueprint = store.load()?;

    if !store.exists() {
        tracing::debug!(path = %store.path().display(), "no blueprint file");
        return Ok(blueprint);
    }

    let refreshed = refresh_goals(&mut blueprint.goals, now);
    if refreshed.is_empty() {
        return Ok(blueprint);
    }

    store.save(&blueprint)?;

    let entries: Vec<AuditEntry> = refreshed
        .iter()
        .map(|change| {
            AuditEntry::update(
                EntityType::Goal,
                FundingItemId::for_goal(change.after.id).to_string(),
                Some(change.after.name.clone()),
                &change.before,
                &change.after,
                Some(format!(
                    "monthly refresh: current amount {} -> 0",
                    change.before.current_amount
                )),
            )
        })
        .collect();
    AuditLogger::new(paths.audit_log()).log_batch(&entries)?;

    Ok(blueprint)
}
