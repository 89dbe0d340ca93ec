//! Flexible expense model
//!
//! Day-to-day costs (food, transport, ...) that are paid out of pocket money
//! rather than funded as an obligation or goal.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::amount;
use super::lenient;

/// How often an expense amount recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ExpenseFrequency {
    Weekly,
    #[default]
    Monthly,
    Annual,
}

impl fmt::Display for ExpenseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Annual => write!(f, "Annual"),
        }
    }
}

impl ExpenseFrequency {
    /// Parse a frequency label, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "annual" | "yearly" => Some(Self::Annual),
            _ => None,
        }
    }
}

fn deserialize_frequency<'de, D>(deserializer: D) -> Result<ExpenseFrequency, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient::or_default(deserializer)?;
    Ok(raw.as_deref().and_then(ExpenseFrequency::parse).unwrap_or_default())
}

/// A recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexibleExpense {
    #[serde(default, deserialize_with = "lenient::text_id")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub amount: f64,

    #[serde(default, deserialize_with = "deserialize_frequency")]
    pub frequency: ExpenseFrequency,

    /// Only flexible expenses count toward the spending allowance
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_flexible: bool,
}

impl FlexibleExpense {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        frequency: ExpenseFrequency,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            frequency,
            is_flexible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{"id": "e1", "name": "Food", "amount": 1500, "frequency": "Weekly", "isFlexible": true}"#;
        let expense: FlexibleExpense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.frequency, ExpenseFrequency::Weekly);
        assert!(expense.is_flexible);
    }

    #[test]
    fn test_is_flexible_defaults_false() {
        let expense: FlexibleExpense = serde_json::from_str(r#"{"id": "e2", "amount": 100}"#).unwrap();
        assert!(!expense.is_flexible);
        assert_eq!(expense.frequency, ExpenseFrequency::Monthly);
    }

    #[test]
    fn test_frequency_ignores_case() {
        let json = r#"{"id": 3, "name": "Food", "amount": 1500, "frequency": "weekly", "isFlexible": true}"#;
        let expense: FlexibleExpense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, "3");
        assert_eq!(expense.frequency, ExpenseFrequency::Weekly);
        assert_eq!(ExpenseFrequency::parse(" ANNUAL "), Some(ExpenseFrequency::Annual));
    }

    #[test]
    fn test_unknown_frequency_is_monthly() {
        let json = r#"{"id": "e4", "frequency": "fortnightly", "isFlexible": "yes", "name": null}"#;
        let expense: FlexibleExpense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.frequency, ExpenseFrequency::Monthly);
        assert!(!expense.is_flexible);
        assert_eq!(expense.name, "");
    }
}
