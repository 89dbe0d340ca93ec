//! Priority and category tags for funding items

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently an item should be funded
///
/// Only `High` items take part in the survival pass of the allocator;
/// every priority takes part in the growth pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Parse an optional raw label, falling back to `default` when the label
    /// is missing or not one of high/medium/low
    pub fn coerce(raw: Option<&str>, default: Priority) -> Self {
        raw.and_then(Self::parse).unwrap_or(default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation grouping for a funding item
///
/// Has no influence on the allocation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Bills and loans
    Fixed,
    /// Savings goals
    Savings,
}

impl ItemCategory {
    /// Heading used when the category is displayed as a group
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Fixed => "Bills & Loans",
            Self::Savings => "Savings Goals",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Savings => write!(f, "savings"),
        }
    }
}
