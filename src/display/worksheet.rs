//! Paycheck worksheet presentation
//!
//! Turns an [`AllocationResult`] into what a person acts on: items grouped
//! into bills and savings with "suggested / target" figures, and a checklist
//! of transfers to make. Nothing is recomputed here; amounts are only
//! rounded to whole units.

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::models::{FundingItem, FundingItemId, ItemCategory, Money, Priority};
use crate::services::allocation::{AllocationResult, SATISFIED_THRESHOLD};

/// One funding item on the worksheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorksheetLine {
    pub id: FundingItemId,
    pub name: String,
    pub category: ItemCategory,
    pub priority: Priority,
    pub suggested: Money,
    pub target: Money,
}

/// One action on the transfer checklist
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ChecklistEntry {
    /// Move money to a bill or goal
    Move { amount: Money, target: String },
    /// Keep the pocket money for day-to-day spending
    KeepForSpending { amount: Money },
}

impl ChecklistEntry {
    pub fn describe(&self, symbol: &str) -> String {
        match self {
            Self::Move { amount, target } => {
                format!("Move {} to {}", amount.format_with_symbol(symbol), target)
            }
            Self::KeepForSpending { amount } => {
                format!("Keep {} for Daily Spending", amount.format_with_symbol(symbol))
            }
        }
    }
}

/// Display-ready view of one allocation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worksheet {
    pub fixed: Vec<WorksheetLine>,
    pub savings: Vec<WorksheetLine>,
    pub checklist: Vec<ChecklistEntry>,
    pub base_allowance: Money,
    pub income_surplus: Money,
    pub total_pocket_money: Money,
    pub shortfall: Money,
}

impl Worksheet {
    /// Build the worksheet for `items` from the engine's `result`
    pub fn build(items: &[FundingItem], result: &AllocationResult) -> Self {
        let mut fixed = Vec::new();
        let mut savings = Vec::new();
        let mut checklist = Vec::new();

        for item in items {
            let suggested = result.suggestion(item.id());
            let line = WorksheetLine {
                id: item.id().clone(),
                name: item.name().to_string(),
                category: item.category(),
                priority: item.priority(),
                suggested: Money::round_from(suggested),
                target: Money::round_from(item.monthly_target()),
            };

            if suggested > SATISFIED_THRESHOLD {
                checklist.push(ChecklistEntry::Move {
                    amount: line.suggested,
                    target: line.name.clone(),
                });
            }

            match item.category() {
                ItemCategory::Fixed => fixed.push(line),
                ItemCategory::Savings => savings.push(line),
            }
        }

        let total_pocket_money = Money::round_from(result.total_pocket_money);
        checklist.push(ChecklistEntry::KeepForSpending {
            amount: total_pocket_money,
        });

        Self {
            fixed,
            savings,
            checklist,
            base_allowance: Money::round_from(result.spending_allowance),
            income_surplus: Money::round_from(result.final_surplus),
            total_pocket_money,
            shortfall: Money::round_from(result.shortfall),
        }
    }

    /// All lines, bills first
    pub fn lines(&self) -> impl Iterator<Item = &WorksheetLine> {
        self.fixed.iter().chain(self.savings.iter())
    }

    pub fn has_shortfall(&self) -> bool {
        !self.shortfall.is_zero()
    }
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Priority")]
    priority: Priority,
    #[tabled(rename = "Suggested")]
    suggested: String,
    #[tabled(rename = "Target")]
    target: String,
}

fn format_group(heading: &str, lines: &[WorksheetLine], symbol: &str) -> String {
    let mut output = format!("{}\n", heading);

    if lines.is_empty() {
        output.push_str("  (nothing to fund)\n");
        return output;
    }

    let rows = lines.iter().map(|line| LineRow {
        name: line.name.clone(),
        priority: line.priority,
        suggested: line.suggested.format_with_symbol(symbol),
        target: line.target.format_with_symbol(symbol),
    });

    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');
    output
}

/// Format the worksheet for terminal output
pub fn format_worksheet(worksheet: &Worksheet, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_group(ItemCategory::Fixed.heading(), &worksheet.fixed, symbol));
    output.push('\n');
    output.push_str(&format_group(ItemCategory::Savings.heading(), &worksheet.savings, symbol));
    output.push('\n');

    output.push_str("Spending Cash\n");
    output.push_str(&format!(
        "  Base Allowance:     {}\n",
        worksheet.base_allowance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Income Surplus:   + {}\n",
        worksheet.income_surplus.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Pocket Money: {}{}\n",
        worksheet.total_pocket_money.format_with_symbol(symbol),
        if worksheet.has_shortfall() { " ⚠" } else { "" }
    ));

    if worksheet.has_shortfall() {
        output.push_str(&format!(
            "  Allowance exceeds income by {}; nothing was allocated.\n",
            worksheet.shortfall.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str("Weekly Checklist:\n");
    for entry in &worksheet.checklist {
        output.push_str(&format!("  [ ] {}\n", entry.describe(symbol)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{normalize, Goal, Obligation};
    use crate::services::allocation::allocate_items;

    fn sample_items() -> Vec<FundingItem> {
        normalize(
            &[Obligation::new(1, "Rent", 8000.0)],
            &[Goal::new(1, "Fund", 0.0).with_monthly_plan(1000.0)],
        )
    }

    #[test]
    fn test_groups_by_category() {
        let items = sample_items();
        let result = allocate_items(20000.0, 2000.0, &items);

        let worksheet = Worksheet::build(&items, &result);

        assert_eq!(worksheet.fixed.len(), 1);
        assert_eq!(worksheet.savings.len(), 1);
        assert_eq!(worksheet.fixed[0].name, "Rent");
        assert_eq!(worksheet.fixed[0].suggested.units(), 8000);
        assert_eq!(worksheet.savings[0].target.units(), 1000);
        assert_eq!(worksheet.income_surplus.units(), 9000);
        assert_eq!(worksheet.total_pocket_money.units(), 11000);
    }

    #[test]
    fn test_goals_always_group_as_savings() {
        let groceries = Goal::new(2, "Groceries Buffer", 6000.0)
            .with_priority("high")
            .with_refresh(crate::models::RefreshType::Monthly);
        let items = normalize(&[], &[groceries]);
        let result = allocate_items(10000.0, 0.0, &items);

        let worksheet = Worksheet::build(&items, &result);

        assert!(worksheet.fixed.is_empty());
        assert_eq!(worksheet.savings[0].name, "Groceries Buffer");
        assert_eq!(worksheet.savings[0].priority, Priority::High);
    }

    #[test]
    fn test_checklist_lines() {
        let items = sample_items();
        let result = allocate_items(20000.0, 2000.0, &items);

        let worksheet = Worksheet::build(&items, &result);
        let lines: Vec<String> = worksheet.checklist.iter().map(|e| e.describe("₱")).collect();

        assert_eq!(
            lines,
            vec![
                "Move ₱8,000 to Rent",
                "Move ₱1,000 to Fund",
                "Keep ₱11,000 for Daily Spending"
            ]
        );
    }

    #[test]
    fn test_checklist_skips_unfunded_items() {
        let items = sample_items();
        let result = allocate_items(1000.0, 2000.0, &items);

        let worksheet = Worksheet::build(&items, &result);

        assert_eq!(worksheet.checklist.len(), 1);
        assert!(matches!(
            worksheet.checklist[0],
            ChecklistEntry::KeepForSpending { amount } if amount.units() == 2000
        ));
        assert!(worksheet.has_shortfall());
        assert_eq!(worksheet.shortfall.units(), 1000);
    }

    #[test]
    fn test_presenter_does_not_change_engine_numbers() {
        let items = sample_items();
        let result = allocate_items(5123.4, 1000.0, &items);
        let before = result.clone();

        let _ = Worksheet::build(&items, &result);

        assert_eq!(result, before);
    }

    #[test]
    fn test_format_worksheet() {
        let items = sample_items();
        let result = allocate_items(20000.0, 2000.0, &items);
        let output = format_worksheet(&Worksheet::build(&items, &result), "₱");

        assert!(output.contains("Bills & Loans"));
        assert!(output.contains("Savings Goals"));
        assert!(output.contains("Rent"));
        assert!(output.contains("₱8,000"));
        assert!(output.contains("Keep ₱11,000 for Daily Spending"));
        assert!(!output.contains("⚠"));
    }

    #[test]
    fn test_format_empty_groups() {
        let result = allocate_items(5000.0, 1000.0, &[]);
        let output = format_worksheet(&Worksheet::build(&[], &result), "$");

        assert!(output.contains("(nothing to fund)"));
        assert!(output.contains("Keep $5,000 for Daily Spending"));
    }
}
