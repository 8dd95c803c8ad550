//! XML manifest of requested resources.

pub mod format;
pub mod parser;

pub use format::ManifestDocument;
pub use parser::{Manifest, ManifestFile};
