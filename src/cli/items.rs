//! `items` command

use chrono::Utc;

use super::blueprint::load_blueprint;
use crate::config::{PaydayPaths, Settings};
use crate::display::format_items;
use crate::error::PaydayResult;
use crate::models::normalize;
use crate::storage::BlueprintStore;

/// List the funding items the allocator would see
pub fn handle_items(
    paths: &PaydayPaths,
    settings: &Settings,
    store: &BlueprintStore,
) -> PaydayResult<()> {
    let blueprint = load_blueprint(paths, store, Utc::now())?;
    let items = normalize(&blueprint.obligations, &blueprint.goals);

    println!("{}", format_items(&items, &settings.currency_symbol));
    Ok(())
}
