use serde::{Deserialize, Serialize};

use super::transform::Transform;

/// Top level of a Tabletop Simulator save file.
///
/// Only the fields the rules look at are modelled; everything else in the
/// save is ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(rename = "SaveName", default, skip_serializing_if = "Option::is_none")]
    pub save_name: Option<String>,

    #[serde(
        rename = "ObjectStates",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub object_states: Option<Vec<SceneObject>>,
}

/// One placed object in the scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneObject {
    /// Object type tag, e.g. `Custom_AssetBundle`
    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Nickname", default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(rename = "Transform", default)]
    pub transform: Transform,

    #[serde(rename = "Locked", default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    #[serde(
        rename = "CustomAssetbundle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_assetbundle: Option<CustomAssetbundle>,

    #[serde(rename = "CustomMesh", default, skip_serializing_if = "Option::is_none")]
    pub custom_mesh: Option<CustomMesh>,

    #[serde(
        rename = "ContainedObjects",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contained_objects: Option<Vec<SceneObject>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomAssetbundle {
    #[serde(
        rename = "AssetbundleURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assetbundle_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomMesh {
    #[serde(rename = "MeshURL", default, skip_serializing_if = "Option::is_none")]
    pub mesh_url: Option<String>,

    #[serde(rename = "DiffuseURL", default, skip_serializing_if = "Option::is_none")]
    pub diffuse_url: Option<String>,
}

/// The object types the rules distinguish between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    AssetBundle,
    CustomModel,
    Bag,
    Other,
}

impl ObjectKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Custom_AssetBundle" => ObjectKind::AssetBundle,
            "Custom_Model" => ObjectKind::CustomModel,
            "Bag" => ObjectKind::Bag,
            _ => ObjectKind::Other,
        }
    }
}

impl SceneObject {
    pub fn kind(&self) -> ObjectKind {
        ObjectKind::from_name(&self.name)
    }

    pub fn is_asset_bundle(&self) -> bool {
        self.kind() == ObjectKind::AssetBundle
    }

    /// The free-text label, empty when the save omits it
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or_default()
    }

    /// Lowercased nickname used by every case-insensitive rule
    pub fn nickname_lower(&self) -> String {
        self.nickname().to_lowercase()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }

    /// Objects held directly by this container; empty for non-bags
    pub fn contents(&self) -> &[SceneObject] {
        match (self.kind(), &self.contained_objects) {
            (ObjectKind::Bag, Some(contained)) => contained,
            _ => &[],
        }
    }

    /// Bundle URL, ignoring empty strings
    pub fn assetbundle_url(&self) -> Option<&str> {
        self.custom_assetbundle
            .as_ref()
            .and_then(|bundle| bundle.assetbundle_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Mesh and diffuse URLs in that order, ignoring empty strings
    pub fn mesh_urls(&self) -> Vec<&str> {
        let Some(mesh) = &self.custom_mesh else {
            return Vec::new();
        };
        [mesh.mesh_url.as_deref(), mesh.diffuse_url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|url| !url.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let save: SaveFile = serde_json::from_value(json!({
            "SaveName": "DBR - 2025-01-01",
            "VersionNumber": "v13.2",
            "ObjectStates": [
                {"Name": "Bag", "GUID": "abc", "ContainedObjects": [{"Name": "Custom_AssetBundle"}]}
            ]
        }))
        .unwrap();

        let objects = save.object_states.unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].kind(), ObjectKind::Bag);
        assert_eq!(objects[0].contents().len(), 1);
        assert!(objects[0].contents()[0].is_asset_bundle());
    }

    #[test]
    fn test_missing_object_states_is_none() {
        let save: SaveFile = serde_json::from_value(json!({"SaveName": "x"})).unwrap();
        assert!(save.object_states.is_none());
    }

    #[test]
    fn test_contents_only_for_bags() {
        let obj: SceneObject = serde_json::from_value(json!({
            "Name": "Deck",
            "ContainedObjects": [{"Name": "Card"}]
        }))
        .unwrap();
        assert!(obj.contents().is_empty());
    }

    #[test]
    fn test_mesh_urls_skip_empty() {
        let obj: SceneObject = serde_json::from_value(json!({
            "Name": "Custom_Model",
            "CustomMesh": {"MeshURL": "", "DiffuseURL": "https://github.com/a.png"}
        }))
        .unwrap();
        assert_eq!(obj.mesh_urls(), vec!["https://github.com/a.png"]);
        assert_eq!(obj.assetbundle_url(), None);
    }
}
