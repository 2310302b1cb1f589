use super::component_wrapper;
use crate::ffi::ComponentKind;
use djinn_core::math::{Quaternion, Vector3};

component_wrapper!(
    /// Position, orientation (Euler angles, radians) and scale.
    Transform,
    ComponentKind::Transform
);

impl Transform {
    pub fn translation(&self) -> Vector3 {
        self.entity.host().transform_translation(self.entity.id())
    }

    pub fn set_translation(&self, translation: Vector3) {
        self.entity
            .host()
            .transform_set_translation(self.entity.id(), translation);
    }

    pub fn eulers(&self) -> Vector3 {
        self.entity.host().transform_eulers(self.entity.id())
    }

    pub fn set_eulers(&self, eulers: Vector3) {
        self.entity.host().transform_set_eulers(self.entity.id(), eulers);
    }

    pub fn scale(&self) -> Vector3 {
        self.entity.host().transform_scale(self.entity.id())
    }

    pub fn set_scale(&self, scale: Vector3) {
        self.entity.host().transform_set_scale(self.entity.id(), scale);
    }

    /// Orientation as a quaternion, built from a fresh read of the Euler
    /// angles.
    pub fn rotation(&self) -> Quaternion {
        Quaternion::from_eulers(self.eulers())
    }
}
