use crate::matching::is_fresh;
use crate::model::{
    Failure, FailureReason, KeyedCollection, ProvisionedWorkflowMap, RequestedWorkflowMap,
};

/// Check that every requested workflow map is loaded and recent enough
pub fn reconcile_workflow_maps(
    requested: &KeyedCollection<RequestedWorkflowMap>,
    provisioned: &KeyedCollection<ProvisionedWorkflowMap>,
) -> Vec<Failure> {
    let mut failures = Vec::new();

    for req in requested {
        let Some(found) = provisioned.get(&req.name) else {
            failures.push(Failure::missing(req.clone()));
            continue;
        };

        if let Some(since) = req.modified_since {
            if !is_fresh(since, found.modified) {
                failures.push(Failure::new(
                    req.clone(),
                    FailureReason::NotModifiedSince {
                        modified: found.modified,
                    },
                ));
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::parse_date;

    fn req(name: &str, since: Option<&str>) -> RequestedWorkflowMap {
        RequestedWorkflowMap {
            name: name.to_string(),
            modified_since: since.map(|s| parse_date(s).unwrap()),
        }
    }

    fn prov(name: &str, modified: &str) -> ProvisionedWorkflowMap {
        ProvisionedWorkflowMap {
            name: name.to_string(),
            modified: Some(parse_date(modified).unwrap()),
        }
    }

    fn prov_undated(name: &str) -> ProvisionedWorkflowMap {
        ProvisionedWorkflowMap {
            name: name.to_string(),
            modified: None,
        }
    }

    #[test]
    fn test_modified_before_required_date_fails() {
        let requested: KeyedCollection<_> = vec![req("WF1", Some("2024-01-01"))].into_iter().collect();
        let provisioned: KeyedCollection<_> = vec![prov("WF1", "2023-12-31")].into_iter().collect();

        let failures = reconcile_workflow_maps(&requested, &provisioned);
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0].reason,
            FailureReason::NotModifiedSince { .. }
        ));
    }

    #[test]
    fn test_modified_on_or_after_passes() {
        let requested: KeyedCollection<_> = vec![req("WF1", Some("2024-01-01"))].into_iter().collect();
        for modified in ["2024-01-01", "2024-03-15"] {
            let provisioned: KeyedCollection<_> = vec![prov("WF1", modified)].into_iter().collect();
            assert!(reconcile_workflow_maps(&requested, &provisioned).is_empty());
        }
    }

    #[test]
    fn test_undated_map_fails_only_when_constrained() {
        let provisioned: KeyedCollection<_> = vec![prov_undated("WF1")].into_iter().collect();

        let constrained: KeyedCollection<_> =
            vec![req("WF1", Some("2024-01-01"))].into_iter().collect();
        let failures = reconcile_workflow_maps(&constrained, &provisioned);
        assert_eq!(
            failures,
            vec![Failure::new(
                req("WF1", Some("2024-01-01")),
                FailureReason::NotModifiedSince { modified: None },
            )]
        );

        let unconstrained: KeyedCollection<_> = vec![req("WF1", None)].into_iter().collect();
        assert!(reconcile_workflow_maps(&unconstrained, &provisioned).is_empty());
    }

    #[test]
    fn test_presence_only() {
        let requested: KeyedCollection<_> = vec![req("WF1", None), req("WF2", None)]
            .into_iter()
            .collect();
        let provisioned: KeyedCollection<_> = vec![prov("WF1", "2001-01-01")].into_iter().collect();

        let failures = reconcile_workflow_maps(&requested, &provisioned);
        assert_eq!(failures, vec![Failure::missing(req("WF2", None))]);
    }
}
