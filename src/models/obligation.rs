//! Fixed obligation model
//!
//! Bills and loans as they arrive from the obligations collection.

use serde::{Deserialize, Serialize};

use super::amount;
use super::ids::SourceId;
use super::lenient;
use super::priority::Priority;

/// A recurring monthly bill or loan payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    #[serde(default, deserialize_with = "lenient::source_id")]
    pub id: SourceId,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    /// Monthly amount due
    #[serde(default, deserialize_with = "amount::deserialize_lenient")]
    pub amount: f64,

    /// Raw priority label; see [`Obligation::priority`]
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,
}

impl Obligation {
    pub fn new(id: SourceId, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Effective priority: bills are `High` unless they say otherwise
    pub fn priority(&self) -> Priority {
        Priority::coerce(self.priority.as_deref(), Priority::High)
    }

    /// Amount due this month, never negative or NaN
    pub fn monthly_amount(&self) -> f64 {
        amount::sanitize(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_to_high() {
        let rent = Obligation::new(1, "Rent", 8000.0);
        assert_eq!(rent.priority(), Priority::High);

        let odd = Obligation::new(2, "Gym", 900.0).with_priority("whenever");
        assert_eq!(odd.priority(), Priority::High);

        let low = Obligation::new(3, "Streaming", 300.0).with_priority("low");
        assert_eq!(low.priority(), Priority::Low);
    }

    #[test]
    fn test_monthly_amount_is_sanitized() {
        assert_eq!(Obligation::new(1, "Broken", f64::NAN).monthly_amount(), 0.0);
        assert_eq!(Obligation::new(2, "Refund", -100.0).monthly_amount(), 0.0);
    }

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{"id": 3, "name": "Car Loan", "amount": "4500", "priority": "HIGH"}"#;
        let obligation: Obligation = serde_json::from_str(json).unwrap();

        assert_eq!(obligation.id, 3);
        assert_eq!(obligation.amount, 4500.0);
        assert_eq!(obligation.priority(), Priority::High);
    }

    #[test]
    fn test_deserialize_wrong_types() {
        let json = r#"{"id": "5", "name": null, "amount": 800, "priority": 1}"#;
        let obligation: Obligation = serde_json::from_str(json).unwrap();

        assert_eq!(obligation.id, 5);
        assert_eq!(obligation.name, "");
        assert_eq!(obligation.priority, None);
        assert_eq!(obligation.priority(), Priority::High);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let obligation: Obligation = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(obligation.name, "");
        assert_eq!(obligation.amount, 0.0);
        assert_eq!(obligation.priority, None);
    }
}
