use serde::{Deserialize, Serialize};
use std::fmt;

/// A position or scale triple
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// True when every axis is within `tolerance` of `other` (inclusive)
    pub fn within(&self, other: &Vec3, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

/// World transform of a scene object.
///
/// Every field is optional in real saves; callers pick the default that
/// makes sense for them (tables assume unit scale, miniatures assume zero).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_z: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_z: Option<f64>,
}

impl Transform {
    /// Position with missing axes treated as 0
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.pos_x.unwrap_or(0.0),
            self.pos_y.unwrap_or(0.0),
            self.pos_z.unwrap_or(0.0),
        )
    }

    /// Scale with missing axes replaced by `default`
    pub fn scale_or(&self, default: f64) -> Vec3 {
        Vec3::new(
            self.scale_x.unwrap_or(default),
            self.scale_y.unwrap_or(default),
            self.scale_z.unwrap_or(default),
        )
    }

    /// The X scale, which the rules use as the uniform scale of a model
    pub fn uniform_scale(&self) -> f64 {
        self.scale_x.unwrap_or(0.0)
    }
}
