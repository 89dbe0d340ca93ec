//! `init` and `config` commands

use chrono::Utc;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{PaydayPaths, Settings};
use crate::error::PaydayResult;
use crate::storage::{Blueprint, BlueprintStore};

/// Create the directories, settings file and a sample blueprint
///
/// Existing files are left untouched.
pub fn handle_init(
    paths: &PaydayPaths,
    settings: &Settings,
    store: &BlueprintStore,
) -> PaydayResult<()> {
    println!("Initializing payday at: {}", paths.base_dir().display());

    paths.ensure_directories()?;
    let logger = AuditLogger::new(paths.audit_log());

    if paths.is_initialized() {
        println!("Settings already exist: {}", paths.settings_file().display());
    } else {
        settings.save(paths)?;
        logger.log(&AuditEntry::create(
            EntityType::Settings,
            "config.json",
            None,
            settings,
        ))?;
        println!("Created settings: {}", paths.settings_file().display());
    }

    if store.exists() {
        println!("Blueprint already exists: {}", store.path().display());
    } else {
        let blueprint = Blueprint::sample(Utc::now());
        store.save(&blueprint)?;
        logger.log(&AuditEntry::create(
            EntityType::Blueprint,
            store.path().display().to_string(),
            None,
            &blueprint,
        ))?;
        println!("Created sample blueprint: {}", store.path().display());
        println!();
        println!(
            "It has {} obligations, {} goals and {} flexible expenses.",
            blueprint.obligations.len(),
            blueprint.goals.len(),
            blueprint.expenses.len()
        );
        println!("Edit it, then run 'payday allocate <income>'.");
    }

    Ok(())
}

/// Print the resolved paths and settings
pub fn handle_config(paths: &PaydayPaths, settings: &Settings, store: &BlueprintStore) {
    println!("payday configuration");
    println!("====================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!(
        "Blueprint:       {}{}",
        store.path().display(),
        if store.exists() { "" } else { " (missing)" }
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Default allowance: {}", settings.default_allowance);
    println!("  Blueprint format:  {}", settings.blueprint_format.extension());
}
