//! Object traversal: the top-level list, then one level into each bag

use crate::models::SceneObject;

#[derive(Debug, Clone, Copy)]
pub struct SceneWalk<'a> {
    objects: &'a [SceneObject],
}

impl<'a> SceneWalk<'a> {
    pub fn new(objects: &'a [SceneObject]) -> Self {
        Self { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn top_level(self) -> impl Iterator<Item = &'a SceneObject> + 'a {
        self.objects.iter()
    }

    /// Objects held directly inside bags; bags never nest further
    pub fn nested(self) -> impl Iterator<Item = &'a SceneObject> + 'a {
        self.objects.iter().flat_map(SceneObject::contents)
    }

    pub fn top_level_bundles(self) -> impl Iterator<Item = &'a SceneObject> + 'a {
        self.top_level().filter(|obj| obj.is_asset_bundle())
    }

    pub fn nested_bundles(self) -> impl Iterator<Item = &'a SceneObject> + 'a {
        self.nested().filter(|obj| obj.is_asset_bundle())
    }

    /// Top-level bundles first, then bundles found inside bags
    pub fn all_bundles(self) -> impl Iterator<Item = &'a SceneObject> + 'a {
        self.top_level_bundles().chain(self.nested_bundles())
    }
}

/// Case-insensitive substring test on a nickname
pub fn nickname_has(obj: &SceneObject, needle: &str) -> bool {
    obj.nickname_lower().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn objects() -> Vec<SceneObject> {
        serde_json::from_value(json!([
            {"Name": "Custom_AssetBundle", "Nickname": "Loose Wood Terrain"},
            {"Name": "Bag", "Nickname": "Terrain Bag", "ContainedObjects": [
                {"Name": "Custom_AssetBundle", "Nickname": "Bagged Hill Terrain"},
                {"Name": "Bag", "ContainedObjects": [
                    {"Name": "Custom_AssetBundle", "Nickname": "Too deep"}
                ]}
            ]},
            {"Name": "Custom_Model", "Nickname": "Main Table"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_nested_is_one_level_only() {
        let objects = objects();
        let walk = SceneWalk::new(&objects);
        let nested: Vec<&str> = walk.nested().map(|o| o.nickname()).collect();
        assert_eq!(nested, vec!["Bagged Hill Terrain", ""]);
    }

    #[test]
    fn test_all_bundles_order() {
        let objects = objects();
        let walk = SceneWalk::new(&objects);
        let names: Vec<&str> = walk.all_bundles().map(|o| o.nickname()).collect();
        assert_eq!(names, vec!["Loose Wood Terrain", "Bagged Hill Terrain"]);
    }

    #[test]
    fn test_nickname_has_ignores_case() {
        let objects = objects();
        assert!(nickname_has(&objects[2], "table"));
        assert!(!nickname_has(&objects[2], "left"));
    }
}
