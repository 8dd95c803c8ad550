use crate::errors::Result;
use depcheck_core::matching::Version;
use depcheck_core::model::{KeyedCollection, ProvisionedTemplate};
use depcheck_core::ports::DocumentApi;
use std::collections::HashSet;

/// List one backend's templates, resolving the highest version of `versioned` doc codes
///
/// Versions are compared numerically; a document with no versions reports
/// [`Version::FLOOR`].
pub fn collect_templates(
    api: &dyn DocumentApi,
    versioned: &HashSet<String>,
) -> Result<KeyedCollection<ProvisionedTemplate>> {
    let documents = api.search_documents()?;
    let mut out = KeyedCollection::new();

    for doc in documents {
        let max_version = if versioned.contains(&doc.name) {
            let versions = api.get_versions(&doc.id)?;
            let max = versions
                .iter()
                .map(|v| Version::new(v.major, v.minor, v.revision))
                .fold(Version::FLOOR, Version::max);
            Some(max)
        } else {
            None
        };

        out.insert(ProvisionedTemplate {
            doc_code: doc.name,
            id: doc.id,
            max_version,
        });
    }

    tracing::debug!(
        backend = api.backend_name(),
        provisioned = out.len(),
        "templates collected"
    );
    Ok(out)
}
