mod validate;

pub use validate::{OutputFormat, validate_command};
