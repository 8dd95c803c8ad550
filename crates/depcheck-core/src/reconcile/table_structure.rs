use crate::matching::missing_columns;
use crate::model::{
    Failure, FailureReason, Keyed, KeyedCollection, ProvisionedTableStructure,
    RequestedTableStructure,
};

/// Check that every requested table exists with all requested columns
pub fn reconcile_table_structure(
    requested: &KeyedCollection<RequestedTableStructure>,
    provisioned: &KeyedCollection<ProvisionedTableStructure>,
) -> Vec<Failure> {
    let mut failures = Vec::new();

    for req in requested {
        match provisioned.get(&req.key()) {
            None => failures.push(Failure::missing(req.clone())),
            Some(found) => {
                let missing = missing_columns(&req.columns, &found.columns);
                if !missing.is_empty() {
                    failures.push(Failure::new(
                        req.clone(),
                        FailureReason::MissingColumns { columns: missing },
                    ));
                }
            }
        }
    }

    failures
}
