//! Core data models for payday
//!
//! Upstream records (obligations, goals, flexible expenses), the normalized
//! [`FundingItem`] the allocator works on, and the presentation [`Money`] type.

pub mod amount;
pub mod expense;
pub mod funding_item;
pub mod goal;
pub mod ids;
pub mod lenient;
pub mod money;
pub mod obligation;
pub mod priority;

pub use expense::{ExpenseFrequency, FlexibleExpense};
pub use funding_item::{normalize, FundingItem};
pub use goal::{Goal, RefreshType};
pub use ids::{FundingItemId, SourceId};
pub use money::Money;
pub use obligation::Obligation;
pub use priority::{ItemCategory, Priority};
