pub mod category;
pub mod failure;
pub mod keyed;
pub mod permissions;
pub mod provisioned;
pub mod requested;

pub use category::Category;
pub use failure::{Failure, FailureReason};
pub use keyed::{Keyed, KeyedCollection};
pub use permissions::PermissionSet;
pub use provisioned::{
    ProvisionedDataQuery, ProvisionedTablePermission, ProvisionedTableStructure,
    ProvisionedTemplate, ProvisionedWorkflowMap,
};
pub use requested::{
    table_key, RequestedDataQuery, RequestedResource, RequestedTablePermission,
    RequestedTableStructure, RequestedTemplate, RequestedWorkflowMap,
};
