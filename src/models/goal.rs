//! Savings goal model
//!
//! Goals as they arrive from the goals collection, plus the monthly refresh
//! rule for goals that start over every calendar month.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::amount;
use super::ids::SourceId;
use super::lenient;
use super::priority::Priority;

/// Whether a goal's progress resets at the start of each month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RefreshType {
    #[default]
    None,
    Monthly,
}

impl RefreshType {
    /// Parse a refresh label, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Some(Self::None),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

fn deserialize_refresh_type<'de, D>(deserializer: D) -> Result<RefreshType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient::or_default(deserializer)?;
    Ok(raw.as_deref().and_then(RefreshType::parse).unwrap_or_default())
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default, deserialize_with = "lenient::source_id")]
    pub id: SourceId,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub target_amount: f64,

    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub current_amount: f64,

    /// Planned monthly contribution; 0 means "no plan"
    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub monthly_plan: f64,

    /// Raw priority label; see [`Goal::priority`]
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,

    /// Linked account, carried through untouched
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<SourceId>,

    #[serde(default, deserialize_with = "deserialize_refresh_type")]
    pub refresh_type: RefreshType,

    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl Goal {
    pub fn new(id: SourceId, name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            monthly_plan: 0.0,
            priority: None,
            account_id: None,
            refresh_type: RefreshType::None,
            last_refreshed_at: None,
        }
    }

    pub fn with_current(mut self, current_amount: f64) -> Self {
        self.current_amount = current_amount;
        self
    }

    pub fn with_monthly_plan(mut self, monthly_plan: f64) -> Self {
        self.monthly_plan = monthly_plan;
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_refresh(mut self, refresh_type: RefreshType) -> Self {
        self.refresh_type = refresh_type;
        self
    }

    /// Effective priority: goals are `Medium` unless they say otherwise
    pub fn priority(&self) -> Priority {
        Priority::coerce(self.priority.as_deref(), Priority::Medium)
    }

    /// Outstanding balance needed to reach the target, never negative
    pub fn remaining_to_target(&self) -> f64 {
        amount::sanitize(amount::sanitize(self.target_amount) - amount::sanitize(self.current_amount))
    }

    /// How much this goal wants funded this cycle
    ///
    /// The monthly plan when one is set, otherwise whatever is still
    /// missing to reach the target.
    pub fn monthly_need(&self) -> f64 {
        let plan = amount::sanitize(self.monthly_plan);
        if plan > 0.0 {
            plan
        } else {
            self.remaining_to_target()
        }
    }

    /// A monthly goal is due once the calendar month (or year) has changed
    /// since it was last refreshed. A goal that was never refreshed is due.
    pub fn is_due_for_refresh(&self, now: DateTime<Utc>) -> bool {
        if self.refresh_type != RefreshType::Monthly {
            return false;
        }

        match self.last_refreshed_at {
            Some(last) => last.month() != now.month() || last.year() != now.year(),
            None => true,
        }
    }

    /// Start the month over: progress back to zero
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.current_amount = 0.0;
        self.last_refreshed_at = Some(now);
    }
}
