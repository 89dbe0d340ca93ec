//! Storage layer for payday
//!
//! Blueprint snapshots on disk, written atomically.

pub mod blueprint;
pub mod file_io;

pub use blueprint::{Blueprint, BlueprintStore};
