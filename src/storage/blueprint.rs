//! Blueprint snapshot storage
//!
//! A blueprint is a snapshot of the upstream collections the allocator reads:
//! obligations, goals and flexible expenses. It lives in one JSON or YAML
//! file using the upstream field names.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file_io::{format_for_path, read_document, write_document_atomic};
use crate::config::{BlueprintFormat, PaydayPaths, Settings};
use crate::error::PaydayResult;
use crate::models::lenient;
use crate::models::{ExpenseFrequency, FlexibleExpense, Goal, Obligation, RefreshType};

/// Snapshot of everything a paycheck can be allocated to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default, deserialize_with = "lenient::rows")]
    pub obligations: Vec<Obligation>,
    #[serde(default, deserialize_with = "lenient::rows")]
    pub goals: Vec<Goal>,
    #[serde(default, deserialize_with = "lenient::rows")]
    pub expenses: Vec<FlexibleExpense>,
}

impl Blueprint {
    pub fn is_empty(&self) -> bool {
        self.obligations.is_empty() && self.goals.is_empty() && self.expenses.is_empty()
    }

    /// Starter blueprint written by `payday init`
    pub fn sample(now: DateTime<Utc>) -> Self {
        let mut groceries = Goal::new(2, "Groceries Buffer", 6000.0)
            .with_priority("high")
            .with_refresh(RefreshType::Monthly);
        groceries.last_refreshed_at = Some(now);

        Self {
            obligations: vec![
                Obligation::new(1, "Rent", 8000.0).with_priority("high"),
                Obligation::new(2, "Electricity", 1800.0).with_priority("high"),
                Obligation::new(3, "Car Loan", 4500.0),
                Obligation::new(4, "Streaming", 549.0).with_priority("low"),
            ],
            goals: vec![
                Goal::new(1, "Emergency Fund", 50000.0)
                    .with_current(12000.0)
                    .with_monthly_plan(2000.0)
                    .with_priority("medium"),
                groceries,
                Goal::new(3, "Travel", 30000.0)
                    .with_monthly_plan(1500.0)
                    .with_priority("low"),
            ],
            expenses: vec![
                FlexibleExpense::new("food", "Food", 1500.0, ExpenseFrequency::Weekly),
                FlexibleExpense::new("transport", "Transport", 2165.0, ExpenseFrequency::Monthly),
            ],
        }
    }
}

/// Where a blueprint is read from and written to
#[derive(Debug, Clone)]
pub struct BlueprintStore {
    path: PathBuf,
    format: BlueprintFormat,
}

impl BlueprintStore {
    /// Store for an explicit file; the format follows the extension
    pub fn new(path: PathBuf) -> Self {
        let format = format_for_path(&path);
        Self { path, format }
    }

    /// Store for `override_path` if given, otherwise the default blueprint in
    /// the data directory in the configured format
    pub fn resolve(paths: &PaydayPaths, settings: &Settings, override_path: Option<PathBuf>) -> Self {
        match override_path {
            Some(path) => Self::new(path),
            None => Self {
                path: paths.blueprint_file(settings.blueprint_format.extension()),
                format: settings.blueprint_format,
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> BlueprintFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the blueprint; a missing file is an empty blueprint
    pub fn load(&self) -> PaydayResult<Blueprint> {
        read_document(&self.path, self.format)
    }

    pub fn save(&self, blueprint: &Blueprint) -> PaydayResult<()> {
        write_document_atomic(&self.path, blueprint, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = BlueprintStore::new(temp_dir.path().join("blueprint.json"));

        let blueprint = store.load().unwrap();
        assert!(blueprint.is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_save_and_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let store = BlueprintStore::new(temp_dir.path().join("blueprint.yml"));
        let blueprint = Blueprint::sample(Utc::now());

        store.save(&blueprint).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(store.format(), BlueprintFormat::Yaml);
        assert_eq!(loaded, blueprint);
    }

    #[test]
    fn test_resolve_uses_settings_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaydayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.blueprint_format = BlueprintFormat::Yaml;

        let store = BlueprintStore::resolve(&paths, &settings, None);
        assert_eq!(store.path(), paths.blueprint_file("yaml"));

        let custom = temp_dir.path().join("mine.json");
        let store = BlueprintStore::resolve(&paths, &settings, Some(custom.clone()));
        assert_eq!(store.path(), custom);
        assert_eq!(store.format(), BlueprintFormat::Json);
    }

    #[test]
    fn test_reads_upstream_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blueprint.json");
        std::fs::write(
            &path,
            r#"{
                "obligations": [{"id": 1, "name": "Rent", "amount": 8000, "priority": "high"}],
                "goals": [{"id": 1, "name": "Fund", "targetAmount": 0, "currentAmount": 0, "monthlyPlan": 1000}]
            }"#,
        )
        .unwrap();

        let blueprint = BlueprintStore::new(path).load().unwrap();

        assert_eq!(blueprint.obligations.len(), 1);
        assert_eq!(blueprint.goals[0].monthly_plan, 1000.0);
        assert!(blueprint.expenses.is_empty());
    }

    fn load_json(json: &str) -> Blueprint {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blueprint.json");
        std::fs::write(&path, json).unwrap();
        BlueprintStore::new(path).load().unwrap()
    }

    #[test]
    fn test_non_string_priority_is_coerced() {
        let blueprint = load_json(
            r#"{"obligations": [{"id": 1, "name": "Rent", "amount": 8000, "priority": 1}]}"#,
        );

        let rent = &blueprint.obligations[0];
        assert_eq!(rent.priority, None);
        assert_eq!(rent.priority(), crate::models::Priority::High);
        assert_eq!(rent.monthly_amount(), 8000.0);
    }

    #[test]
    fn test_null_name_reads_as_empty() {
        let blueprint = load_json(
            r#"{"goals": [{"id": 4, "name": null, "targetAmount": 3000, "priority": null}]}"#,
        );

        assert_eq!(blueprint.goals[0].name, "");
        assert_eq!(blueprint.goals[0].priority(), crate::models::Priority::Medium);
    }

    #[test]
    fn test_goal_without_id_is_kept() {
        let blueprint = load_json(
            r#"{"goals": [
                {"name": "Trip", "monthlyPlan": 500},
                {"id": 3, "name": "Laptop", "monthlyPlan": 800}
            ]}"#,
        );

        assert_eq!(blueprint.goals.len(), 2);
        assert_eq!(blueprint.goals[0].id, lenient::MISSING_ID);
        assert_eq!(blueprint.goals[1].id, 3);
    }

    #[test]
    fn test_lowercase_frequency() {
        let blueprint = load_json(
            r#"{"expenses": [{"id": "food", "name": "Food", "amount": 1500, "frequency": "weekly", "isFlexible": true}]}"#,
        );

        assert_eq!(blueprint.expenses[0].frequency, ExpenseFrequency::Weekly);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let blueprint = load_json(
            r#"{
                "obligations": [{"id": 1, "name": "Rent", "amount": 8000}, "oops", null],
                "goals": {"not": "a list"},
                "expenses": null
            }"#,
        );

        assert_eq!(blueprint.obligations.len(), 1);
        assert!(blueprint.goals.is_empty());
        assert!(blueprint.expenses.is_empty());
    }

    #[test]
    fn test_lenient_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blueprint.yaml");
        std::fs::write(
            &path,
            "obligations:\n  - id: 1\n    name: Rent\n    amount: 8000\n    priority: 2\nexpenses:\n  - id: 5\n    name: Food\n    amount: 1500\n    frequency: WEEKLY\n    isFlexible: true\n",
        )
        .unwrap();

        let blueprint = BlueprintStore::new(path).load().unwrap();

        assert_eq!(blueprint.obligations[0].priority, None);
        assert_eq!(blueprint.expenses[0].id, "5");
        assert_eq!(blueprint.expenses[0].frequency, ExpenseFrequency::Weekly);
    }
}
