//! Funding item display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{FundingItem, Money, Priority};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Priority")]
    priority: Priority,
    #[tabled(rename = "Weekly Min")]
    weekly_minimum: String,
    #[tabled(rename = "Monthly Target")]
    monthly_target: String,
}

/// Format normalized funding items as a table
pub fn format_items(items: &[FundingItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No obligations or goals found.".to_string();
    }

    let rows = items.iter().map(|item| ItemRow {
        id: item.id().to_string(),
        name: item.name().to_string(),
        category: item.category().heading().to_string(),
        priority: item.priority(),
        weekly_minimum: Money::round_from(item.weekly_minimum()).format_with_symbol(symbol),
        monthly_target: Money::round_from(item.monthly_target()).format_with_symbol(symbol),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!("\n{} item(s)\n", items.len()));
    output
}
