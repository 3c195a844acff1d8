//! # Storage Layer
//!
//! The [`ConfigStore`] trait abstracts where the connection configuration
//! lives so the command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, `connection.json` under a
//!   configuration directory. A missing file loads as the default (empty)
//!   configuration; saving creates the directory as needed.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with a save
//!   counter so tests can assert that cancelled operations never persist.
//!
//! Persistence is whole-document: the store replaces the entire
//! configuration on every save. Concurrent editors are not coordinated —
//! last write wins, which is accepted for single-user, single-session use.

use crate::config::ConnectionConfig;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract access to the persisted connection configuration.
pub trait ConfigStore {
    /// Read the current configuration, or defaults if nothing is persisted yet.
    fn load(&self) -> Result<ConnectionConfig>;

    /// Replace the persisted configuration. Failures propagate; no retry.
    fn save(&mut self, config: &ConnectionConfig) -> Result<()>;
}
