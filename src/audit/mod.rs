//! Audit logging for payday
//!
//! Every change the tool makes on disk (settings and blueprint creation,
//! monthly goal refreshes) is appended to `audit.log` as one JSON line with
//! the entity's before/after values.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
