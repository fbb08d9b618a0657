pub mod save;
pub mod transform;

// Re-export commonly used types
pub use save::{CustomAssetbundle, CustomMesh, ObjectKind, SaveFile, SceneObject};
pub use transform::{Transform, Vec3};
