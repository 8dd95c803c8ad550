use crate::model::Category;
use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure that aborts a category check is classified by one of these
/// kinds. Each kind maps to a stable error code for programmatic handling,
/// log assertions, and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Manifest structurally malformed or missing required attributes
    Parse,
    /// Unparsable version, date, or wildcard pattern
    Validation,
    /// Connection, query, HTTP, or backend data failure
    Backend,
    /// Missing configuration section/key or bad connection-string template
    Config,
    Io,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::Backend => "ERR_BACKEND",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the context needed to find the offending
/// input: the operation, the category being checked, and the resource key.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    category: Option<Category>,
    resource_key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            category: None,
            resource_key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add category context
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Add the key of the resource being processed
    pub fn with_resource_key(mut self, key: impl Into<String>) -> Self {
        self.resource_key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the category context, if any
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Get the resource key context, if any
    pub fn resource_key(&self) -> Option<&str> {
        self.resource_key.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(category) = self.category {
            write!(f, " (category: {})", category.name())?;
        }
        if let Some(key) = &self.resource_key {
            write!(f, " (resource: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised while building or comparing typed resource records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepCheckError {
    /// Version string is not `major[.minor[.patch]]`
    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// Date string is not `%Y-%m-%d`
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Wildcard pattern cannot be compiled
    #[error("Invalid wildcard pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Permission token outside SELECT/INSERT/UPDATE/DELETE
    #[error("Unknown permission '{value}'")]
    UnknownPermission { value: String },

    /// Boolean attribute holds something other than true/false
    #[error("Invalid boolean '{value}' for attribute {attribute}")]
    InvalidFlag { attribute: String, value: String },

    /// Required manifest attribute is missing or empty
    #[error("Missing attribute {attribute} on <{element}>")]
    MissingAttribute { element: String, attribute: String },
}

impl From<DepCheckError> for ExError {
    fn from(err: DepCheckError) -> Self {
        match &err {
            DepCheckError::InvalidVersion { value, .. } => ExError::new(ExErrorKind::Validation)
                .with_op("parse_version")
                .with_resource_key(value.clone())
                .with_message(err.to_string()),

            DepCheckError::InvalidDate { value } => ExError::new(ExErrorKind::Validation)
                .with_op("parse_date")
                .with_resource_key(value.clone())
                .with_message(err.to_string()),

            DepCheckError::InvalidPattern { pattern, .. } => {
                ExError::new(ExErrorKind::Validation)
                    .with_op("compile_pattern")
                    .with_resource_key(pattern.clone())
                    .with_message(err.to_string())
            }

            DepCheckError::UnknownPermission { .. }
            | DepCheckError::InvalidFlag { .. }
            | DepCheckError::MissingAttribute { .. } => {
                ExError::new(ExErrorKind::Parse).with_message(err.to_string())
            }
        }
    }
}

/// Conversion from serde_json::Error for report serialization
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Parse, "ERR_PARSE"),
            (ExErrorKind::Validation, "ERR_VALIDATION"),
            (ExErrorKind::Backend, "ERR_BACKEND"),
            (ExErrorKind::Config, "ERR_CONFIG"),
            (ExErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Backend)
            .with_op("sql_select")
            .with_category(Category::TablePermission)
            .with_resource_key("DBA.ACCT*")
            .with_message("connection refused");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_BACKEND] in operation 'sql_select'"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("Table Permissions"));
        assert!(text.contains("DBA.ACCT*"));
    }

    #[test]
    fn test_invalid_version_maps_to_validation() {
        let err: ExError = DepCheckError::InvalidVersion {
            value: "1.x".to_string(),
            reason: "component 'x' is not a number".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::Validation);
        assert_eq!(err.resource_key(), Some("1.x"));
    }

    #[test]
    fn test_missing_attribute_maps_to_parse() {
        let err: ExError = DepCheckError::MissingAttribute {
            element: "document".to_string(),
            attribute: "docCode".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::Parse);
        assert!(err.message().contains("docCode"));
    }
}
