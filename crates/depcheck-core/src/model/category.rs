use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource category checked by one independent pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Template,
    DataQuery,
    TableStructure,
    TablePermission,
    WorkflowMap,
}

impl Category {
    /// All categories in the order a full run checks them
    pub const ALL: [Category; 5] = [
        Category::Template,
        Category::DataQuery,
        Category::TableStructure,
        Category::TablePermission,
        Category::WorkflowMap,
    ];

    /// Display name used as the report `Name`
    pub fn name(&self) -> &'static str {
        match self {
            Category::Template => "Document Templates",
            Category::DataQuery => "Letter Data Queries",
            Category::TableStructure => "Table Structure",
            Category::TablePermission => "Table Permissions",
            Category::WorkflowMap => "Workflow Maps",
        }
    }

    /// Command-line slug
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Template => "templates",
            Category::DataQuery => "data-queries",
            Category::TableStructure => "table-structure",
            Category::TablePermission => "table-permissions",
            Category::WorkflowMap => "workflow-maps",
        }
    }

    /// Look a category up by its slug
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_stable() {
        assert_eq!(Category::Template.name(), "Document Templates");
        assert_eq!(Category::DataQuery.name(), "Letter Data Queries");
        assert_eq!(Category::TableStructure.name(), "Table Structure");
        assert_eq!(Category::TablePermission.name(), "Table Permissions");
        assert_eq!(Category::WorkflowMap.name(), "Workflow Maps");
    }

    #[test]
    fn test_slug_lookup_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("tables"), None);
    }
}
