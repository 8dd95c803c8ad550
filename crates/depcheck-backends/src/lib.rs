//! depcheck backends - I/O adapters for dependency provisioning checks
//!
//! Provides:
//! - XML manifest loading and per-category requested-resource extraction
//! - TOML configuration with region overrides and connection-string templates
//! - `SqlExecutor` over SQLite and the document-management REST clients
//! - Collectors turning backend rows/payloads into provisioned records

pub mod collect;
pub mod config;
pub mod db;
pub mod docmgmt;
pub mod errors;
pub mod manifest;
pub mod sql;

// Re-export key types
pub use config::{Config, ConfigSection};
pub use docmgmt::{RestSettings, SmartCommClient, ThunderheadNowClient};
pub use errors::Result;
pub use manifest::Manifest;
pub use sql::SqliteExecutor;
