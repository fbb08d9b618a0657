use crate::catalog::RuleCatalog;
use once_cell::sync::Lazy;

// Embed the default rule catalog YAML file at compile time
const DEFAULT_CATALOG_YAML: &str = include_str!("catalog.yaml");

// Parse the default catalog once at startup
pub static DEFAULT_CATALOG: Lazy<RuleCatalog> = Lazy::new(|| {
    RuleCatalog::from_yaml(DEFAULT_CATALOG_YAML)
        .expect("Failed to parse default rule catalog - this is a bug")
});
