//! Per-category reconciliation of requested against provisioned resources.
//!
//! Every reconciler walks the requested collection in order and returns the
//! failures in that same order. They are pure apart from diagnostic logging;
//! running one twice over the same inputs yields the same failures.

pub mod data_queries;
pub mod table_permissions;
pub mod table_structure;
pub mod templates;
pub mod workflow_maps;

pub use data_queries::reconcile_data_queries;
pub use table_permissions::reconcile_table_permissions;
pub use table_structure::reconcile_table_structure;
pub use templates::reconcile_templates;
pub use workflow_maps::reconcile_workflow_maps;
