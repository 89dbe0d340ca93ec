use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use payday::cli::{
    handle_allocate, handle_allowance, handle_audit, handle_config, handle_init, handle_items,
    AllocateArgs,
};
use payday::config::{PaydayPaths, Settings};
use payday::storage::BlueprintStore;

#[derive(Parser)]
#[command(
    name = "payday",
    version,
    about = "Split a paycheck across bills, loans and savings goals",
    long_about = "payday reserves pocket money from a paycheck, funds the weekly \
                  minimum of high-priority items first, then spreads what is left \
                  evenly across every bill and goal up to its monthly target."
)]
struct Cli {
    /// Blueprint file to use instead of the one in the data directory
    #[arg(long, global = true, env = "PAYDAY_BLUEPRINT")]
    blueprint: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create settings and a sample blueprint
    Init,

    /// Show current configuration and paths
    Config,

    /// List obligations and goals as funding items
    Items,

    /// Allocate a paycheck and show the worksheet
    Allocate(AllocateArgs),

    /// Show the weekly allowance suggested by flexible expenses
    Allowance,

    /// Show recent changes recorded in the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    payday::logging::init_tracing();

    let cli = Cli::parse();

    let paths = PaydayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = BlueprintStore::resolve(&paths, &settings, cli.blueprint);

    match cli.command {
        Some(Commands::Init) => handle_init(&paths, &settings, &store)?,
        Some(Commands::Config) => handle_config(&paths, &settings, &store),
        Some(Commands::Items) => handle_items(&paths, &settings, &store)?,
        Some(Commands::Allocate(args)) => handle_allocate(&paths, &settings, &store, args)?,
        Some(Commands::Allowance) => handle_allowance(&paths, &settings, &store)?,
        Some(Commands::Audit { limit }) => handle_audit(&paths, limit)?,
        None => {
            println!("payday - split a paycheck across bills and goals");
            println!();
            println!("Run 'payday --help' for usage information.");
            println!("Run 'payday init' to get started.");
        }
    }

    Ok(())
}
