//! Configuration module for payday
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PaydayPaths;
pub use settings::{BlueprintFormat, Settings};
