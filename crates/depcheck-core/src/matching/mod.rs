//! Identity and matching primitives shared by the reconcilers.

pub mod columns;
pub mod dates;
pub mod version;
pub mod wildcard;

pub use columns::missing_columns;
pub use dates::{is_fresh, parse_date};
pub use version::Version;
pub use wildcard::{wildcard_match, WildcardPattern};
