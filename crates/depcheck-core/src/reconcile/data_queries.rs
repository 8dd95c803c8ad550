use crate::model::{Failure, KeyedCollection, ProvisionedDataQuery, RequestedDataQuery};

/// Requested data queries with no provisioned doc code
pub fn reconcile_data_queries(
    requested: &KeyedCollection<RequestedDataQuery>,
    provisioned: &KeyedCollection<ProvisionedDataQuery>,
) -> Vec<Failure> {
    requested
        .iter()
        .filter(|req| !provisioned.contains_key(&req.doc_code))
        .map(|req| Failure::missing(req.clone()))
        .collect()
}
