//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod allocate;
pub mod allowance;
pub mod audit;
pub mod blueprint;
pub mod items;
pub mod setup;

pub use allocate::{handle_allocate, AllocateArgs, OutputFormat};
pub use allowance::handle_allowance;
pub use audit::handle_audit;
pub use blueprint::load_blueprint;
pub use items::handle_items;
pub use setup::{handle_config, handle_init};
