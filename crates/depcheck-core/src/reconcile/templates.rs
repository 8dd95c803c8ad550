use crate::model::{
    Failure, FailureReason, KeyedCollection, ProvisionedTemplate, RequestedTemplate,
};

/// Check that every requested template is loaded, at or above its minimum version
pub fn reconcile_templates(
    requested: &KeyedCollection<RequestedTemplate>,
    provisioned: &KeyedCollection<ProvisionedTemplate>,
) -> Vec<Failure> {
    let mut failures = Vec::new();

    for req in requested {
        let Some(found) = provisioned.get(&req.doc_code) else {
            failures.push(Failure::missing(req.clone()));
            continue;
        };

        if let Some(min_version) = req.min_version {
            let found_version = found.effective_version();
            if found_version < min_version {
                tracing::debug!(
                    doc_code = %req.doc_code,
                    min_version = %min_version,
                    found = %found_version,
                    "template below minimum version"
                );
                failures.push(Failure::new(
                    req.clone(),
                    FailureReason::VersionBelowMinimum {
                        found: found_version,
                    },
                ));
            }
        }
    }

    failures
}
