//! Monthly goal refresh
//!
//! Goals with a monthly refresh start every calendar month from zero. The
//! reset happens when a blueprint is loaded, before any allocation uses it.

use chrono::{DateTime, Utc};

use crate::models::Goal;

/// A goal that was reset, with its state before and after
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshedGoal {
    pub before: Goal,
    pub after: Goal,
}

/// Reset every monthly goal that is due, returning what changed
pub fn refresh_goals(goals: &mut [Goal], now: DateTime<Utc>) -> Vec<RefreshedGoal> {
    let mut refreshed = Vec::new();

    for goal in goals.iter_mut().filter(|g| g.is_due_for_refresh(now)) {
        let before = goal.clone();
        goal.refresh(now);

        tracing::info!(goal = %goal.name, id = goal.id, "refreshed goal");
        refreshed.push(RefreshedGoal {
            before,
            after: goal.clone(),
        });
    }

    refreshed
}
