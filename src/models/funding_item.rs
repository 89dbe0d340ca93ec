//! Normalized funding items
//!
//! Obligations and goals have different shapes upstream. Before allocation
//! both are turned into [`FundingItem`]s, the single representation the
//! engine reasons about.

use serde::Serialize;
use std::collections::HashMap;

use super::amount;
use super::goal::Goal;
use super::ids::FundingItemId;
use super::lenient::MISSING_ID;
use super::obligation::Obligation;
use super::priority::{ItemCategory, Priority};
use crate::services::allocation::WEEKS_PER_MONTH;

/// Something the paycheck can be directed to
///
/// `weekly_minimum` is always derived from `monthly_target`; there is no
/// way to set it independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingItem {
    id: FundingItemId,
    name: String,
    weekly_minimum: f64,
    monthly_target: f64,
    priority: Priority,
    category: ItemCategory,
}

impl FundingItem {
    pub fn new(
        id: FundingItemId,
        name: impl Into<String>,
        monthly_target: f64,
        priority: Priority,
        category: ItemCategory,
    ) -> Self {
        let monthly_target = amount::sanitize(monthly_target);
        Self {
            id,
            name: name.into(),
            weekly_minimum: monthly_target / WEEKS_PER_MONTH,
            monthly_target,
            priority,
            category,
        }
    }

    pub fn from_obligation(obligation: &Obligation) -> Self {
        Self::new(
            FundingItemId::for_obligation(obligation.id),
            obligation.name.clone(),
            obligation.monthly_amount(),
            obligation.priority(),
            ItemCategory::Fixed,
        )
    }

    pub fn from_goal(goal: &Goal) -> Self {
        Self::new(
            FundingItemId::for_goal(goal.id),
            goal.name.clone(),
            goal.monthly_need(),
            goal.priority(),
            ItemCategory::Savings,
        )
    }

    pub fn id(&self) -> &FundingItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One week's share of the monthly target
    pub fn weekly_minimum(&self) -> f64 {
        self.weekly_minimum
    }

    pub fn monthly_target(&self) -> f64 {
        self.monthly_target
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

/// Normalize obligations and goals into one list: obligations first, then
/// goals, each in input order
///
/// Ids are unique in the output. Should an upstream collection repeat an id,
/// later repeats get a `#n` suffix so no item is merged away. Records read
/// without an id share [`MISSING_ID`] and are kept apart the same way.
pub fn normalize(obligations: &[Obligation], goals: &[Goal]) -> Vec<FundingItem> {
    for name in obligations
        .iter()
        .filter(|o| o.id == MISSING_ID)
        .map(|o| &o.name)
        .chain(goals.iter().filter(|g| g.id == MISSING_ID).map(|g| &g.name))
    {
        tracing::warn!(name = %name, "record has no id");
    }

    let mut items: Vec<FundingItem> = obligations
        .iter()
        .map(FundingItem::from_obligation)
        .chain(goals.iter().map(FundingItem::from_goal))
        .collect();

    let mut seen: HashMap<FundingItemId, usize> = HashMap::new();
    for item in &mut items {
        let count = seen.entry(item.id.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            let unique = item.id.with_occurrence(*count);
            tracing::warn!(id = %item.id, renamed = %unique, "duplicate source id");
            item.id = unique;
        }
    }

    items
}
