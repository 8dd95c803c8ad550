//! Provisioned-resource collectors, one per category
//!
//! Each collector turns raw backend rows or API payloads into typed
//! provisioned records. Rows that do not have the expected shape are
//! `Backend` errors; nothing is silently dropped except SQL NULL identifiers.

#![allow(clippy::result_large_err)]

pub mod data_queries;
pub mod table_permissions;
pub mod table_structure;
pub mod templates;
pub mod workflow_maps;

pub use data_queries::collect_data_queries;
pub use table_permissions::collect_table_permissions;
pub use table_structure::collect_table_structure;
pub use templates::collect_templates;
pub use workflow_maps::collect_workflow_maps;

use crate::errors::{backend_data, Result};
use depcheck_core::ports::SqlValue;

/// Trimmed text of cell `idx`; `None` for SQL NULL
pub(crate) fn cell_text(op: &str, row: &[SqlValue], idx: usize) -> Result<Option<String>> {
    let cell = row.get(idx).ok_or_else(|| {
        backend_data(
            op,
            format!("expected at least {} columns, row has {}", idx + 1, row.len()),
        )
    })?;
    Ok(cell.to_text().map(|t| t.trim().to_string()))
}
