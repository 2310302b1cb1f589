//! Component data owned by [`SceneHost`](crate::SceneHost)
//!
//! These are the values behind the script-side wrappers. Defaults match what
//! a freshly added component carries in the editor.

use djinn_core::math::{Vector2, Vector3, Vector4};
use djinn_script::{BodyType, ProjectionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformData {
    pub translation: Vector3,
    /// Euler angles in radians.
    pub eulers: Vector3,
    pub scale: Vector3,
}

impl Default for TransformData {
    fn default() -> Self {
        Self {
            translation: Vector3::ZERO,
            eulers: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }
}

impl TransformData {
    pub fn at(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteData {
    pub tint: Vector4,
}

impl Default for SpriteData {
    fn default() -> Self {
        Self { tint: Vector4::ONE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleData {
    pub colour: Vector4,
    pub thickness: f32,
    pub fade: f32,
}

impl Default for CircleData {
    fn default() -> Self {
        Self {
            colour: Vector4::ONE,
            thickness: 1.0,
            fade: 0.005,
        }
    }
}

/// Clip planes plus the "vertical FOV" slot: view height for orthographic
/// projection, angle in radians for perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionData {
    pub vertical_fov: f32,
    pub near: f32,
    pub far: f32,
}

/// Camera state. Each projection keeps its own parameters; the script-facing
/// getters and setters address whichever projection is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraData {
    pub projection: ProjectionType,
    pub orthographic: ProjectionData,
    pub perspective: ProjectionData,
    pub fixed_aspect_ratio: bool,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            projection: ProjectionType::Orthographic,
            orthographic: ProjectionData {
                vertical_fov: 10.0,
                near: -1.0,
                far: 1.0,
            },
            perspective: ProjectionData {
                vertical_fov: 60f32.to_radians(),
                near: 0.01,
                far: 1000.0,
            },
            fixed_aspect_ratio: false,
        }
    }
}

impl CameraData {
    pub fn perspective() -> Self {
        Self {
            projection: ProjectionType::Perspective,
            ..Self::default()
        }
    }

    pub fn active(&self) -> &ProjectionData {
        match self.projection {
            ProjectionType::Orthographic => &self.orthographic,
            ProjectionType::Perspective => &self.perspective,
        }
    }

    pub fn active_mut(&mut self) -> &mut ProjectionData {
        match self.projection {
            ProjectionType::Orthographic => &mut self.orthographic,
            ProjectionType::Perspective => &mut self.perspective,
        }
    }
}

/// Names the script class bound to an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptData {
    pub class_name: String,
}

impl ScriptData {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

/// Body settings plus the last velocities reported by the physics world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidBodyData {
    pub body_type: BodyType,
    pub fixed_rotation: bool,
    pub velocity: Vector2,
    pub angular_velocity: f32,
}

impl RigidBodyData {
    pub fn dynamic() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectColliderData {
    pub offset: Vector2,
    pub half_extent: Vector2,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub restitution_threshold: f32,
}

impl Default for RectColliderData {
    fn default() -> Self {
        Self {
            offset: Vector2::ZERO,
            half_extent: Vector2::splat(0.5),
            density: 1.0,
            friction: 0.5,
            restitution: 0.0,
            restitution_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleColliderData {
    pub offset: Vector2,
    pub radius: f32,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub restitution_threshold: f32,
}

impl Default for CircleColliderData {
    fn default() -> Self {
        Self {
            offset: Vector2::ZERO,
            radius: 0.5,
            density: 1.0,
            friction: 0.5,
            restitution: 0.0,
            restitution_threshold: 0.5,
        }
    }
}
