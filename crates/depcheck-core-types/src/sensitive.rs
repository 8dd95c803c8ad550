//! Sensitive data marker for automatic redaction
//!
//! Backend credentials and rendered connection strings travel through
//! configuration and into adapters; wrapping them in `Sensitive<T>` keeps them
//! out of logs, error messages, and `Debug` dumps.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use depcheck_core_types::Sensitive;
///
/// let dsn = Sensitive::new("DATABASE=DB2T1;UID=svc;PWD=hunter2");
/// assert_eq!(format!("{:?}", dsn), "***REDACTED***");
/// assert_eq!(format!("{}", dsn), "***REDACTED***");
///
/// // Access the actual value when the adapter needs it
/// assert!(dsn.expose().contains("PWD"));
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Only adapters that hand the value to a driver or HTTP client should
    /// call this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
