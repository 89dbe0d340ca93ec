//! `allocate` command
//!
//! Runs the engine on the blueprint and prints or writes the worksheet.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, ValueEnum};

use super::blueprint::load_blueprint;
use crate::config::{PaydayPaths, Settings};
use crate::display::{format_worksheet, Worksheet};
use crate::error::{PaydayError, PaydayResult};
use crate::export::{
    export_worksheet_csv, export_worksheet_json, export_worksheet_yaml, WorksheetExport,
};
use crate::models::normalize;
use crate::services::{allocate_items, plan_allowance};
use crate::storage::{Blueprint, BlueprintStore};

/// Worksheet output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tables and checklist for the terminal
    #[default]
    Text,
    /// Full worksheet as JSON
    Json,
    /// Full worksheet as YAML
    Yaml,
    /// One row per funding item
    Csv,
}

/// Arguments for `payday allocate`
#[derive(Args, Debug)]
pub struct AllocateArgs {
    /// Actual income of this paycheck
    pub income: f64,

    /// Pocket money to keep before funding anything
    #[arg(short, long, conflicts_with = "allowance_from_expenses")]
    pub allowance: Option<f64>,

    /// Use the weekly total of flexible expenses as the allowance
    #[arg(long)]
    pub allowance_from_expenses: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Pick the allowance: explicit flag, then expense total, then the setting
pub fn resolve_allowance(args: &AllocateArgs, settings: &Settings, blueprint: &Blueprint) -> f64 {
    match args.allowance {
        Some(allowance) => allowance,
        None if args.allowance_from_expenses => plan_allowance(&blueprint.expenses).total_weekly,
        None => settings.default_allowance,
    }
}

fn validate_amount(label: &str, value: f64) -> PaydayResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PaydayError::Validation(format!(
            "{} must be a non-negative number, got {}",
            label, value
        )));
    }
    Ok(())
}

/// Handle `payday allocate`
pub fn handle_allocate(
    paths: &PaydayPaths,
    settings: &Settings,
    store: &BlueprintStore,
    args: AllocateArgs,
) -> PaydayResult<()> {
    validate_amount("Income", args.income)?;

    let blueprint = load_blueprint(paths, store, Utc::now())?;
    if !store.exists() {
        eprintln!(
            "No blueprint found at {}. Run 'payday init' to create one.",
            store.path().display()
        );
    }

    let allowance = resolve_allowance(&args, settings, &blueprint);
    validate_amount("Allowance", allowance)?;

    let items = normalize(&blueprint.obligations, &blueprint.goals);
    let result = allocate_items(args.income, allowance, &items);
    let worksheet = Worksheet::build(&items, &result);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                PaydayError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_worksheet(&mut writer, &worksheet, args.income, settings, args.format)?;
            writer
                .flush()
                .map_err(|e| PaydayError::Export(e.to_string()))?;
            println!("Worksheet written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_worksheet(&mut writer, &worksheet, args.income, settings, args.format)?;
        }
    }

    Ok(())
}

fn write_worksheet<W: Write>(
    writer: &mut W,
    worksheet: &Worksheet,
    income: f64,
    settings: &Settings,
    format: OutputFormat,
) -> PaydayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match format {
        OutputFormat::Text => {
            write!(writer, "{}", format_worksheet(worksheet, symbol))
                .map_err(|e| PaydayError::Export(e.to_string()))?;
        }
        OutputFormat::Json => {
            export_worksheet_json(&WorksheetExport::new(worksheet, income, symbol), writer, true)?
        }
        OutputFormat::Yaml => {
            export_worksheet_yaml(&WorksheetExport::new(worksheet, income, symbol), writer)?
        }
        OutputFormat::Csv => export_worksheet_csv(worksheet, writer)?,
    }

    Ok(())
}
