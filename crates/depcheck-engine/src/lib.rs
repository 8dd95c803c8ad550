//! depcheck engine - check orchestration
//!
//! Wires the manifest, configuration, and backend adapters into one check per
//! resource category, and runs a selection of categories in sequence.

pub mod checks;
pub mod environment;
pub mod runner;

pub use environment::CheckEnvironment;
pub use runner::{all_passed, run_check, run_checks, CategoryOutcome};
