//! payday - paycheck allocation for bills, loans and savings goals
//!
//! Splits one paycheck across obligations and savings goals with a
//! two-pass water-filling allocator, after reserving pocket money for
//! day-to-day spending.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: source records, funding items and presentation money
//! - `services`: the allocation engine, goal refresh and allowance planning
//! - `display`: the paycheck worksheet and terminal tables
//! - `storage`: blueprint snapshot files (JSON or YAML)
//! - `audit`: audit log of changes the tool makes
//! - `export`: worksheet export to JSON, YAML and CSV
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```
//! use payday::models::{Goal, Obligation};
//!
//! let obligations = vec![Obligation::new(1, "Rent", 8000.0).with_priority("high")];
//! let goals = vec![Goal::new(1, "Fund", 0.0).with_monthly_plan(1000.0)];
//!
//! let result = payday::allocate(20000.0, 2000.0, &obligations, &goals);
//! assert_eq!(result.total_pocket_money.round(), 11000.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PaydayError, PaydayResult};
pub use services::{allocate, AllocationResult};
