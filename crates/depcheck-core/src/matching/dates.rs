use crate::errors::DepCheckError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `%Y-%m-%d` calendar date
///
/// # Errors
///
/// `InvalidDate` when the text is not a valid date in that format.
pub fn parse_date(text: &str) -> Result<NaiveDate, DepCheckError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| DepCheckError::InvalidDate {
        value: text.to_string(),
    })
}

/// True when `modified` is on or after `required_since`; an unknown date is stale
pub fn is_fresh(required_since: NaiveDate, modified: Option<NaiveDate>) -> bool {
    modified.is_some_and(|m| required_since <= m)
}
