use super::component_wrapper;
use crate::error::ScriptError;
use crate::ffi::ComponentKind;
use djinn_core::math::Vector4;
use serde::{Deserialize, Serialize};

/// Camera projection model.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ProjectionType {
    #[default]
    Orthographic = 0,
    Perspective = 1,
}

impl TryFrom<i32> for ProjectionType {
    type Error = ScriptError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ProjectionType::Orthographic),
            1 => Ok(ProjectionType::Perspective),
            other => Err(ScriptError::UnknownProjectionType(other)),
        }
    }
}

impl From<ProjectionType> for i32 {
    fn from(projection: ProjectionType) -> Self {
        projection as i32
    }
}

component_wrapper!(
    /// Flat-coloured quad.
    Sprite,
    ComponentKind::Sprite
);

impl Sprite {
    pub fn tint(&self) -> Vector4 {
        self.entity.host().sprite_tint(self.entity.id())
    }

    pub fn set_tint(&self, tint: Vector4) {
        self.entity.host().sprite_set_tint(self.entity.id(), tint);
    }
}

component_wrapper!(
    /// Procedural circle or ring.
    Circle,
    ComponentKind::Circle
);

impl Circle {
    pub fn colour(&self) -> Vector4 {
        self.entity.host().circle_colour(self.entity.id())
    }

    pub fn set_colour(&self, colour: Vector4) {
        self.entity.host().circle_set_colour(self.entity.id(), colour);
    }

    pub fn thickness(&self) -> f32 {
        self.entity.host().circle_thickness(self.entity.id())
    }

    pub fn set_thickness(&self, thickness: f32) {
        self.entity
            .host()
            .circle_set_thickness(self.entity.id(), thickness);
    }

    pub fn fade(&self) -> f32 {
        self.entity.host().circle_fade(self.entity.id())
    }

    pub fn set_fade(&self, fade: f32) {
        self.entity.host().circle_set_fade(self.entity.id(), fade);
    }
}

component_wrapper!(
    /// Scene camera.
    ///
    /// The vertical FOV and clip planes apply to whichever projection is
    /// active; for orthographic cameras "vertical FOV" is the view height.
    Camera,
    ComponentKind::Camera
);

impl Camera {
    pub fn projection_type(&self) -> ProjectionType {
        self.entity.host().camera_projection_type(self.entity.id())
    }

    pub fn set_projection_type(&self, projection: ProjectionType) {
        self.entity
            .host()
            .camera_set_projection_type(self.entity.id(), projection);
    }

    pub fn vertical_fov(&self) -> f32 {
        self.entity.host().camera_vertical_fov(self.entity.id())
    }

    pub fn set_vertical_fov(&self, fov: f32) {
        self.entity.host().camera_set_vertical_fov(self.entity.id(), fov);
    }

    pub fn near_plane(&self) -> f32 {
        self.entity.host().camera_near_plane(self.entity.id())
    }

    pub fn set_near_plane(&self, near: f32) {
        self.entity.host().camera_set_near_plane(self.entity.id(), near);
    }

    pub fn far_plane(&self) -> f32 {
        self.entity.host().camera_far_plane(self.entity.id())
    }

    pub fn set_far_plane(&self, far: f32) {
        self.entity.host().camera_set_far_plane(self.entity.id(), far);
    }

    pub fn fixed_aspect_ratio(&self) -> bool {
        self.entity.host().camera_fixed_aspect_ratio(self.entity.id())
    }

    pub fn set_fixed_aspect_ratio(&self, fixed: bool) {
        self.entity
            .host()
            .camera_set_fixed_aspect_ratio(self.entity.id(), fixed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::test_host::TestHost;

    #[test]
    fn projection_type_from_raw() {
        assert_eq!(ProjectionType::try_from(1), Ok(ProjectionType::Perspective));
        assert_eq!(i32::from(ProjectionType::Orthographic), 0);
        assert_eq!(
            ProjectionType::try_from(5),
            Err(ScriptError::UnknownProjectionType(5))
        );
    }

    #[test]
    fn camera_properties_round_trip() {
        let (test_host, host) = TestHost::pair();
        let id = test_host.spawn("camera", &[ComponentKind::Camera]);
        let camera = Entity::new(id, host).get_component::<Camera>().unwrap();

        camera.set_projection_type(ProjectionType::Perspective);
        camera.set_vertical_fov(0.8);
        camera.set_near_plane(0.1);
        camera.set_far_plane(500.0);
        camera.set_fixed_aspect_ratio(true);

        assert_eq!(camera.projection_type(), ProjectionType::Perspective);
        assert_eq!(camera.vertical_fov(), 0.8);
        assert_eq!(camera.near_plane(), 0.1);
        assert_eq!(camera.far_plane(), 500.0);
        assert!(camera.fixed_aspect_ratio());
    }

    #[test]
    fn circle_and_sprite_round_trip() {
        let (test_host, host) = TestHost::pair();
        let id = test_host.spawn("disc", &[ComponentKind::Circle, ComponentKind::Sprite]);
        let entity = Entity::new(id, host);

        let circle = entity.get_component::<Circle>().unwrap();
        circle.set_colour(Vector4::new(1.0, 0.5, 0.25, 1.0));
        circle.set_thickness(0.3);
        circle.set_fade(0.01);
        assert_eq!(circle.colour(), Vector4::new(1.0, 0.5, 0.25, 1.0));
        assert_eq!(circle.thickness(), 0.3);
        assert_eq!(circle.fade(), 0.01);

        let sprite = entity.get_component::<Sprite>().unwrap();
        sprite.set_tint(Vector4::ONE);
        assert_eq!(sprite.tint(), Vector4::ONE);
    }
}
