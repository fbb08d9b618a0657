pub mod catalog;
pub mod defaults;
pub mod error;
pub mod error_utils;
pub mod loader;
pub mod models;
pub mod report;
pub mod validation;
