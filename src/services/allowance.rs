//! Spending allowance planner
//!
//! Converts flexible expenses to weekly amounts. Their total is a suggested
//! pocket-money allowance to reserve from each paycheck.

use serde::Serialize;

use super::allocation::WEEKS_PER_MONTH;
use crate::models::{amount, ExpenseFrequency, FlexibleExpense};

const MONTHS_PER_YEAR: f64 = 12.0;

/// One flexible expense expressed per week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllowanceEntry {
    pub name: String,
    pub frequency: ExpenseFrequency,
    pub amount: f64,
    pub weekly_amount: f64,
}

/// Weekly allowance built from flexible expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllowancePlan {
    pub entries: Vec<AllowanceEntry>,
    pub total_weekly: f64,
}

/// Weekly share of an expense amount
pub fn weekly_amount(amount: f64, frequency: ExpenseFrequency) -> f64 {
    let amount = amount::sanitize(amount);
    match frequency {
        ExpenseFrequency::Weekly => amount,
        ExpenseFrequency::Monthly => amount / WEEKS_PER_MONTH,
        ExpenseFrequency::Annual => amount / MONTHS_PER_YEAR / WEEKS_PER_MONTH,
    }
}

/// Build the allowance plan from the flexible expenses in `expenses`
pub fn plan_allowance(expenses: &[FlexibleExpense]) -> AllowancePlan {
    let entries: Vec<AllowanceEntry> = expenses
        .iter()
        .filter(|e| e.is_flexible)
        .map(|e| AllowanceEntry {
            name: e.name.clone(),
            frequency: e.frequency,
            amount: amount::sanitize(e.amount),
            weekly_amount: weekly_amount(e.amount, e.frequency),
        })
        .collect();

    let total_weekly = entries.iter().map(|e| e.weekly_amount).sum();

    AllowancePlan {
        entries,
        total_weekly,
    }
}
