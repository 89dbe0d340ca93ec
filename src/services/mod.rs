//! Service layer for payday
//!
//! The allocation engine and the rules that prepare its inputs.

pub mod allocation;
pub mod allowance;
pub mod refresh;

pub use allocation::{allocate, allocate_items, AllocationResult};
pub use allowance::{plan_allowance, AllowancePlan};
pub use refresh::{refresh_goals, RefreshedGoal};
