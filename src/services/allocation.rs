//! Paycheck allocation engine
//!
//! Splits one paycheck across funding items in two water-filling passes:
//!
//! 1. **Survival**: only `High` priority items, each capped at its weekly
//!    minimum.
//! 2. **Growth**: every item, each capped at its full monthly target. Items
//!    already served in the survival pass keep growing here.
//!
//! Each pass repeatedly splits the remaining pool evenly across the items
//! that still need money. Items that are satisfied drop out, so the rest of
//! the pool flows to the others on the next round (max-min fairness). What
//! is left after both passes is surplus pocket money.
//!
//! The engine is pure: no I/O, no state between calls, full `f64` precision
//! throughout. Rounding is left to the presentation layer.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{normalize, FundingItem, FundingItemId, Goal, Obligation};

/// Average number of weeks in a month, used for every weekly/monthly conversion
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Remaining need at or below this is treated as satisfied; a pool at or
/// below it is treated as exhausted
pub const SATISFIED_THRESHOLD: f64 = 0.5;

/// A round that hands out less than this ends the pass
pub const STALL_THRESHOLD: f64 = 0.1;

/// Outcome of one allocation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    /// Suggested contribution per item (every input item has an entry)
    pub suggestions: BTreeMap<FundingItemId, f64>,
    /// The pocket-money reservation the caller asked for
    pub spending_allowance: f64,
    /// Pool left after every item was served
    pub final_surplus: f64,
    /// How far the allowance alone exceeded income
    pub shortfall: f64,
    /// `spending_allowance + final_surplus`
    pub total_pocket_money: f64,
}

impl AllocationResult {
    /// Suggested amount for an item, 0 for unknown ids
    pub fn suggestion(&self, id: &FundingItemId) -> f64 {
        self.suggestions.get(id).copied().unwrap_or(0.0)
    }

    /// Sum of all suggestions
    pub fn total_allocated(&self) -> f64 {
        self.suggestions.values().sum()
    }

    pub fn has_shortfall(&self) -> bool {
        self.shortfall > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Survival,
    Growth,
}

impl Pass {
    fn name(&self) -> &'static str {
        match self {
            Self::Survival => "survival",
            Self::Growth => "growth",
        }
    }

    fn includes(&self, item: &FundingItem) -> bool {
        match self {
            Self::Survival => item.is_high_priority(),
            Self::Growth => true,
        }
    }

    fn cap(&self, item: &FundingItem) -> f64 {
        match self {
            Self::Survival => item.weekly_minimum(),
            Self::Growth => item.monthly_target(),
        }
    }

    fn remaining(&self, item: &FundingItem, allocated: f64) -> f64 {
        self.cap(item) - allocated
    }
}

/// Allocate a paycheck across obligations and goals
///
/// Normalizes the records and runs [`allocate_items`] on them.
pub fn allocate(
    actual_income: f64,
    spending_allowance: f64,
    obligations: &[Obligation],
    goals: &[Goal],
) -> AllocationResult {
    let items = normalize(obligations, goals);
    allocate_items(actual_income, spending_allowance, &items)
}

/// Allocate a paycheck across already-normalized funding items
///
/// The disposable pool is `actual_income - spending_allowance`. A negative
/// pool funds nothing and is reported as `shortfall`. Never panics.
pub fn allocate_items(
    actual_income: f64,
    spending_allowance: f64,
    items: &[FundingItem],
) -> AllocationResult {
    let actual_income = finite_or_zero(actual_income);
    let spending_allowance = finite_or_zero(spending_allowance);

    let mut allocated = vec![0.0; items.len()];
    let starting_pool = actual_income - spending_allowance;
    let mut pool = starting_pool;

    tracing::debug!(
        income = actual_income,
        allowance = spending_allowance,
        pool,
        items = items.len(),
        "starting allocation"
    );

    pool = water_fill(Pass::Survival, items, &mut allocated, pool);
    pool = water_fill(Pass::Growth, items, &mut allocated, pool);

    // Only a pool that started negative is a shortfall.
    let final_surplus = pool.max(0.0);
    let shortfall = (-starting_pool).max(0.0);

    if shortfall > 0.0 {
        tracing::warn!(shortfall, "allowance exceeds income; nothing allocated");
    }

    let suggestions = items
        .iter()
        .zip(allocated)
        .map(|(item, amount)| (item.id().clone(), amount))
        .collect();

    AllocationResult {
        suggestions,
        spending_allowance,
        final_surplus,
        shortfall,
        total_pocket_money: spending_allowance + final_surplus,
    }
}

/// Run one pass, adding to `allocated` in place; returns the pool left over
fn water_fill(pass: Pass, items: &[FundingItem], allocated: &mut [f64], mut pool: f64) -> f64 {
    let mut active: Vec<usize> = (0..items.len())
        .filter(|&i| {
            pass.includes(&items[i])
                && pass.remaining(&items[i], allocated[i]) > SATISFIED_THRESHOLD
        })
        .collect();

    let mut round = 0;
    while pool > SATISFIED_THRESHOLD && !active.is_empty() {
        round += 1;
        let share = pool / active.len() as f64;
        let mut consumed = 0.0;

        for &i in &active {
            let give = share.min(pass.remaining(&items[i], allocated[i]));
            allocated[i] += give;
            consumed += give;
        }

        pool -= consumed;
        active.retain(|&i| pass.remaining(&items[i], allocated[i]) > SATISFIED_THRESHOLD);

        tracing::trace!(
            pass = pass.name(),
            round,
            share,
            consumed,
            pool,
            still_active = active.len(),
            "water-fill round"
        );

        if consumed < STALL_THRESHOLD {
            break;
        }
    }

    tracing::debug!(pass = pass.name(), rounds = round, pool, "pass complete");
    pool
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
