//! Identifiers for funding items
//!
//! Obligations and goals come from separate upstream collections whose
//! numeric ids can overlap, so a funding item id always carries the kind of
//! record it came from (`obligation-3`, `goal-7`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record in an upstream collection
pub type SourceId = u64;

/// Unique identifier of a funding item within one allocation run
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundingItemId(String);

impl FundingItemId {
    pub fn for_obligation(id: SourceId) -> Self {
        Self(format!("obligation-{}", id))
    }

    pub fn for_goal(id: SourceId) -> Self {
        Self(format!("goal-{}", id))
    }

    /// Derive a distinct id for the `n`th repeat of this id
    pub(crate) fn with_occurrence(&self, n: usize) -> Self {
        Self(format!("{}#{}", self.0, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FundingItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_prevent_collisions() {
        let obligation = FundingItemId::for_obligation(3);
        let goal = FundingItemId::for_goal(3);

        assert_eq!(obligation.as_str(), "obligation-3");
        assert_eq!(goal.as_str(), "goal-3");
        assert_ne!(obligation, goal);
    }

    #[test]
    fn test_occurrence_suffix() {
        let id = FundingItemId::for_goal(7).with_occurrence(2);
        assert_eq!(id.to_string(), "goal-7#2");
    }
}
