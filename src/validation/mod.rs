mod findings;
mod metadata;
mod organic;
mod placement;
mod provenance;
mod tables;
pub mod terrain;
mod units;
mod validator;
mod walk;


// Re-export the main Validator
pub use findings::{FindingSet, Severity};
pub use metadata::has_timestamp;
pub use provenance::is_compliant;
pub use tables::TableSide;
pub use validator::{Check, ValidationOutcome, Validator};
pub use walk::SceneWalk;
