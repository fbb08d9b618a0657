use super::findings::{FindingSet, Severity};
use super::walk::SceneWalk;
use crate::catalog::RuleCatalog;
use crate::models::{ObjectKind, SceneObject};

/// Report lines show at most this many characters of a URL
const URL_DISPLAY_LEN: usize = 60;

/// Assets must be fetched over http(s) from GitHub so every player can load them
pub fn is_compliant(url: &str) -> bool {
    url.starts_with("http") && url.contains("github")
}

/// A resource URL that points somewhere other than GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalReference<'a> {
    pub owner: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Default)]
struct Tally<'a> {
    compliant: usize,
    local: Vec<LocalReference<'a>>,
}

impl<'a> Tally<'a> {
    fn record(&mut self, owner: &'a str, url: &'a str) {
        if is_compliant(url) {
            self.compliant += 1;
        } else {
            self.local.push(LocalReference { owner, url });
        }
    }

    fn record_bundle(&mut self, obj: &'a SceneObject) {
        if let Some(url) = obj.assetbundle_url() {
            self.record(owner_name(obj, "Unknown"), url);
        }
    }

    fn record_model(&mut self, obj: &'a SceneObject) {
        for url in obj.mesh_urls() {
            self.record(owner_name(obj, "Table"), url);
        }
    }
}

fn owner_name<'a>(obj: &'a SceneObject, fallback: &'a str) -> &'a str {
    obj.nickname.as_deref().unwrap_or(fallback)
}

fn truncate(url: &str) -> &str {
    match url.char_indices().nth(URL_DISPLAY_LEN) {
        Some((index, _)) => &url[..index],
        None => url,
    }
}

/// Asset bundles anywhere (top level and inside bags) and top-level custom
/// models (the tables) must reference GitHub-hosted resources
pub fn check(walk: SceneWalk<'_>, catalog: &RuleCatalog, findings: &mut FindingSet) {
    let mut tally = Tally::default();

    for obj in walk.top_level() {
        match obj.kind() {
            ObjectKind::AssetBundle => tally.record_bundle(obj),
            ObjectKind::CustomModel => tally.record_model(obj),
            ObjectKind::Bag | ObjectKind::Other => {}
        }
    }
    for obj in walk.nested_bundles() {
        tally.record_bundle(obj);
    }

    findings.info(format!("✓ GitHub URLs: {}", tally.compliant));

    if !tally.local.is_empty() {
        findings.push_with_details(
            Severity::Error,
            format!("✗ Local file paths found: {}", tally.local.len()),
            tally
                .local
                .iter()
                .map(|r| format!("  - {}: {}...", r.owner, truncate(r.url))),
            catalog.detail_limit,
        );
    }
}
