//! Allowance plan display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{ExpenseFrequency, Money};
use crate::services::AllowancePlan;

#[derive(Tabled)]
struct AllowanceRow {
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Frequency")]
    frequency: ExpenseFrequency,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Per Week")]
    weekly: String,
}

/// Format an allowance plan with its weekly total
pub fn format_allowance_plan(plan: &AllowancePlan, symbol: &str) -> String {
    if plan.entries.is_empty() {
        return "No flexible expenses found.".to_string();
    }

    let rows = plan.entries.iter().map(|entry| AllowanceRow {
        name: entry.name.clone(),
        frequency: entry.frequency,
        amount: Money::round_from(entry.amount).format_with_symbol(symbol),
        weekly: Money::round_from(entry.weekly_amount).format_with_symbol(symbol),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\nSuggested weekly allowance: {}\n",
        Money::round_from(plan.total_weekly).format_with_symbol(symbol)
    ));
    output
}
