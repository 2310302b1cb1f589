use djinn_core::math::Vector3;
use djinn_script::{Camera, Entity, MouseCode, ProjectionType, Script, Transform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraFollowConfig {
    /// Name of the entity to follow.
    pub target_name: String,
    /// Seconds to close the horizontal gap to the target.
    pub follow_lag: f32,
    /// Relative zoom per second while a zoom button is held.
    pub zoom_speed: f32,
}

impl Default for CameraFollowConfig {
    fn default() -> Self {
        Self {
            target_name: "circle".to_owned(),
            follow_lag: 0.5,
            zoom_speed: 1.0,
        }
    }
}

/// Trails a named entity in the xy plane and zooms a perspective camera with
/// mouse buttons 3 and 4.
pub struct CameraFollow {
    entity: Entity,
    config: CameraFollowConfig,
    transform: Option<Transform>,
    camera: Option<Camera>,
    target: Option<Entity>,
    target_transform: Option<Transform>,
}

impl CameraFollow {
    pub const CLASS_NAME: &'static str = "Bud.Examples.Camera";

    pub fn new(entity: Entity, config: CameraFollowConfig) -> Self {
        Self {
            entity,
            config,
            transform: None,
            camera: None,
            target: None,
            target_transform: None,
        }
    }

    pub fn target(&self) -> Option<&Entity> {
        self.target.as_ref()
    }

    fn resolve_target(&mut self) {
        let target = Entity::find_by_name(self.entity.host(), &self.config.target_name);
        self.entity.log().trace(&format!(
            "Attempting to target entity '{}' with ID {}",
            self.config.target_name,
            target.id()
        ));
        if !target.is_valid() {
            return;
        }
        self.target_transform = target.get_component::<Transform>();
        if self.target_transform.is_none() {
            self.entity.log().warn(&format!(
                "Camera target '{}' has no Transform to follow",
                self.config.target_name
            ));
        }
        self.target = Some(target);
    }

    fn zoom(&self, transform: &Transform, dt: f32) {
        let input = self.entity.input();
        let mut zoom = Vector3::ONE;
        if input.is_mouse_button_down(MouseCode::Button3) {
            zoom.z = 1.0 + self.config.zoom_speed * dt;
        }
        if input.is_mouse_button_down(MouseCode::Button4) {
            zoom.z = 1.0 - self.config.zoom_speed * dt;
        }
        if zoom.z != 1.0 {
            transform.set_translation(transform.translation() * zoom);
        }
    }
}

impl Script for CameraFollow {
    fn on_create(&mut self) {
        self.transform = self.entity.get_component::<Transform>();
        self.camera = self.entity.get_component::<Camera>();
        if self.transform.is_none() {
            self.entity.log().warn("CameraFollow needs a Transform component");
        }
    }

    fn on_early_update(&mut self, dt: f32) {
        if self.target.is_none() {
            self.resolve_target();
        }

        let perspective = self
            .camera
            .as_ref()
            .is_some_and(|camera| camera.projection_type() == ProjectionType::Perspective);
        if let (true, Some(transform)) = (perspective, &self.transform) {
            self.zoom(transform, dt);
        }
    }

    fn on_late_update(&mut self, dt: f32) {
        let (Some(transform), Some(target)) = (&self.transform, &self.target_transform) else {
            return;
        };

        let mut gap = target.translation() - transform.translation();
        gap.z = 0.0;
        let rate = if self.config.follow_lag > 0.0 {
            dt / self.config.follow_lag
        } else {
            1.0
        };
        transform.set_translation(transform.translation() + gap * rate);
    }
}
