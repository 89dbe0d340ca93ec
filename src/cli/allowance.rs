//! `allowance` command

use chrono::Utc;

use super::blueprint::load_blueprint;
use crate::config::{PaydayPaths, Settings};
use crate::display::format_allowance_plan;
use crate::error::PaydayResult;
use crate::services::plan_allowance;
use crate::storage::BlueprintStore;

/// Show the weekly allowance suggested by flexible expenses
pub fn handle_allowance(
    paths: &PaydayPaths,
    settings: &Settings,
    store: &BlueprintStore,
) -> PaydayResult<()> {
    let blueprint = load_blueprint(paths, store, Utc::now())?;
    let plan = plan_allowance(&blueprint.expenses);

    println!("{}", format_allowance_plan(&plan, &settings.currency_symbol));
    Ok(())
}
