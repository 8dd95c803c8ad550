use std::collections::BTreeSet;

/// Requested columns absent from the provisioned set, in requested order
///
/// Comparison is exact and case-sensitive. An empty result means the
/// requested columns are contained in the provisioned ones.
pub fn missing_columns(requested: &[String], provisioned: &BTreeSet<String>) -> Vec<String> {
    requested
        .iter()
        .filter(|column| !provisioned.contains(column.as_str()))
        .cloned()
        .collect()
}
