//! End-to-end runs of the sandbox scripts on a stub scene.

use djinn_core::math::{approx_eq, Vector2, Vector3};
use djinn_host::{
    CameraData, CircleColliderData, EntityBuilder, PhysicsCommand, RectColliderData,
    RigidBodyData, SceneHost, ScriptData, ScriptEngine, TransformData,
};
use djinn_sandbox::{
    register_all_with, CameraFollow, FirstPerson, MazeConfig, MazeGenerator, Moveable, Player,
    SandboxConfig, Wasd,
};
use djinn_script::{Entity, EntityId, KeyCode, MouseCode};
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

const DT: f32 = 1.0 / 60.0;

fn engine_with(config: SandboxConfig) -> ScriptEngine {
    let mut engine = ScriptEngine::new(Rc::new(SceneHost::default()));
    register_all_with(&mut engine, &config).unwrap();
    engine
}

fn body(name: &str, class: &str) -> EntityBuilder {
    EntityBuilder::new(name)
        .with(TransformData::default())
        .with(RigidBodyData::dynamic())
        .with(ScriptData::new(class))
}

fn only_force(scene: &SceneHost, id: EntityId) -> Vector2 {
    let forces: Vec<Vector2> = scene
        .take_physics_commands()
        .into_iter()
        .filter_map(|command| match command {
            PhysicsCommand::Force { entity, force, wake } if entity == id => {
                assert!(wake);
                Some(force)
            }
            _ => None,
        })
        .collect();
    assert_eq!(forces.len(), 1, "expected exactly one force, got {forces:?}");
    forces[0]
}

#[test]
fn wasd_w_pushes_up_with_configured_power() {
    let mut config = SandboxConfig::default();
    config.wasd.power = 12.0;
    let mut engine = engine_with(config);
    let id = engine.scene().spawn(body("player", Wasd::CLASS_NAME));

    engine.scene().press_key(KeyCode::W);
    engine.start();
    engine.frame(DT);

    assert_eq!(
        engine.scene().take_physics_commands(),
        vec![PhysicsCommand::Force {
            entity: id,
            force: Vector2::new(0.0, 12.0),
            wake: true,
        }]
    );
}

#[test]
fn wasd_impulse_mode_scales_by_dt() {
    let mut config = SandboxConfig::default();
    config.wasd.use_impulse = true;
    let mut engine = engine_with(config);
    let id = engine.scene().spawn(body("player", Wasd::CLASS_NAME));

    engine.scene().press_key(KeyCode::A);
    engine.start();
    engine.frame(0.5);

    assert_eq!(
        engine.scene().take_physics_commands(),
        vec![PhysicsCommand::LinearImpulse {
            entity: id,
            impulse: Vector2::new(-5.0, 0.0),
            wake: true,
        }]
    );
}

#[test]
fn wasd_without_body_does_nothing() {
    let mut engine = engine_with(SandboxConfig::default());
    engine
        .scene()
        .spawn(EntityBuilder::new("ghost").with(ScriptData::new(Wasd::CLASS_NAME)));

    engine.scene().press_key(KeyCode::D);
    assert_eq!(engine.start(), 1);
    engine.frame(DT);
    assert!(engine.scene().physics_commands().is_empty());
}

#[test]
fn player_cancels_gravity_and_drags() {
    let mut config = SandboxConfig::default();
    config.player.ignore_gravity = true;
    config.player.drag = 0.5;
    let mut engine = engine_with(config);
    let scene = engine.scene().clone();
    let id = scene.spawn(body("player", Player::CLASS_NAME).with(RectColliderData {
        density: 2.0,
        ..RectColliderData::default()
    }));
    scene.set_velocity(id, Vector2::new(2.0, 0.0));

    engine.start();
    engine.frame(DT);

    let force = only_force(&scene, id);
    assert!(approx_eq(force.x, -2.0, 1e-5));
    assert!(approx_eq(force.y, 9.8 * 2.0, 1e-4));
}

#[test]
fn player_arrow_keys_double_vertical() {
    let mut config = SandboxConfig::default();
    config.player.input_strength = 3.0;
    let mut engine = engine_with(config);
    let scene = engine.scene().clone();
    let id = scene.spawn(body("player", Player::CLASS_NAME));

    scene.press_key(KeyCode::Up);
    engine.start();
    engine.frame(DT);
    assert_eq!(only_force(&scene, id), Vector2::new(0.0, 6.0));

    let player = Entity::new(id, engine.host().clone())
        .as_script::<Player>()
        .unwrap();
    assert_eq!(player.borrow().position(), Vector3::ZERO);
}

#[test]
fn moveable_applies_its_own_gravity() {
    let mut config = SandboxConfig::default();
    config.moveable.affected_by_gravity = true;
    config.moveable.drag = 0.0;
    let mut engine = engine_with(config);
    let scene = engine.scene().clone();
    let id = scene.spawn(body("crate", Moveable::CLASS_NAME).with(CircleColliderData {
        density: 4.0,
        ..CircleColliderData::default()
    }));

    engine.start();
    engine.frame(DT);

    let mass = 4.0 * std::f32::consts::PI * 0.25;
    let force = only_force(&scene, id);
    assert_eq!(force.x, 0.0);
    assert!(approx_eq(force.y, -9.8 * mass, 1e-4));
}

#[test]
fn first_person_moves_along_heading_and_turns() {
    let mut config = SandboxConfig::default();
    config.first_person.input_strength_rotation = 3.0;
    let mut engine = engine_with(config);
    let scene = engine.scene().clone();
    let id = scene.spawn(
        EntityBuilder::new("walker")
            .with(TransformData {
                eulers: Vector3::new(0.0, 0.0, FRAC_PI_2),
                ..TransformData::default()
            })
            .with(RigidBodyData::dynamic())
            .with(RectColliderData {
                density: 0.0,
                ..RectColliderData::default()
            })
            .with(ScriptData::new(FirstPerson::CLASS_NAME)),
    );

    scene.press_key(KeyCode::W);
    engine.start();
    engine.frame(DT);

    let commands = scene.take_physics_commands();
    let force = commands.iter().find_map(|command| match *command {
        PhysicsCommand::Force { force, .. } => Some(force),
        _ => None,
    });
    let force = force.unwrap();
    assert!(approx_eq(force.x, -10.0, 1e-4));
    assert!(approx_eq(force.y, 0.0, 1e-4));

    // zero density means zero moment, so turning needs a massive body
    scene.release_key(KeyCode::W);
    scene.press_key(KeyCode::A);
    scene.modify(id, |record| {
        if let Some(collider) = record.rect_collider.as_mut() {
            collider.density = 12.0;
        }
    });
    engine.frame(DT);
    let torque = scene
        .take_physics_commands()
        .into_iter()
        .find_map(|command| match command {
            PhysicsCommand::Torque { torque, .. } => Some(torque),
            _ => None,
        })
        .unwrap();
    // mass 12, moment 12 * 2 / 12 = 2
    assert!(approx_eq(torque, 3.0 * 2.0, 1e-3));
}

#[test]
fn camera_follows_named_target() {
    let mut config = SandboxConfig::default();
    config.camera_follow.follow_lag = 0.5;
    let mut engine = engine_with(config);
    let scene = engine.scene().clone();
    let target = scene.spawn(
        EntityBuilder::new("circle").with(TransformData::at(Vector3::new(4.0, 2.0, 0.0))),
    );
    let camera = scene.spawn(
        EntityBuilder::new("camera")
            .with(TransformData::at(Vector3::new(0.0, 0.0, 5.0)))
            .with(CameraData::default())
            .with(ScriptData::new(CameraFollow::CLASS_NAME)),
    );

    engine.start();
    engine.frame(0.25);

    let translation = scene.inspect(camera, |r| r.transform.map(|t| t.translation));
    assert_eq!(translation, Some(Some(Vector3::new(2.0, 1.0, 5.0))));

    let follower = Entity::new(camera, engine.host().clone())
        .as_script::<CameraFollow>()
        .unwrap();
    assert_eq!(follower.borrow().target().map(Entity::id), Some(target));
}

#[test]
fn camera_holds_still_when_target_has_no_transform() {
    let mut engine = engine_with(SandboxConfig::default());
    let scene = engine.scene().clone();
    let target = scene.spawn(EntityBuilder::new("circle").with(RigidBodyData::dynamic()));
    let camera = scene.spawn(
        EntityBuilder::new("camera")
            .with(TransformData::at(Vector3::new(3.0, -2.0, 5.0)))
            .with(CameraData::default())
            .with(ScriptData::new(CameraFollow::CLASS_NAME)),
    );

    engine.start();
    engine.frame(0.25);
    engine.frame(0.25);

    let translation = scene.inspect(camera, |r| r.transform.map(|t| t.translation));
    assert_eq!(translation, Some(Some(Vector3::new(3.0, -2.0, 5.0))));

    let follower = Entity::new(camera, engine.host().clone())
        .as_script::<CameraFollow>()
        .unwrap();
    assert_eq!(follower.borrow().target().map(Entity::id), Some(target));
}

#[test]
fn perspective_camera_zooms_with_mouse() {
    let mut config = SandboxConfig::default();
    config.camera_follow.target_name = "nobody".to_owned();
    config.camera_follow.zoom_speed = 1.0;
    let mut engine = engine_with(config);
    let scene = engine.scene().clone();
    let camera = scene.spawn(
        EntityBuilder::new("camera")
            .with(TransformData::at(Vector3::new(1.0, 1.0, 4.0)))
            .with(CameraData::perspective())
            .with(ScriptData::new(CameraFollow::CLASS_NAME)),
    );

    scene.press_mouse_button(MouseCode::Button3);
    engine.start();
    engine.frame(0.5);

    let translation = scene.inspect(camera, |r| r.transform.map(|t| t.translation));
    assert_eq!(translation, Some(Some(Vector3::new(1.0, 1.0, 6.0))));
}

#[test]
fn maze_generator_builds_on_create() {
    let config = SandboxConfig {
        maze: MazeConfig {
            width: 5,
            height: 5,
            edge_probability: 1.0,
            min_path_length: 8,
            max_attempts: 10,
            seed: Some(1),
        },
        ..SandboxConfig::default()
    };
    let mut engine = engine_with(config);
    let id = engine
        .scene()
        .spawn(EntityBuilder::new("maze").with(ScriptData::new(MazeGenerator::CLASS_NAME)));

    engine.start();

    let generator = Entity::new(id, engine.host().clone())
        .as_script::<MazeGenerator>()
        .unwrap();
    let generator = generator.borrow();
    assert_eq!(generator.attempts(), 1);
    assert_eq!(generator.maze().map(|maze| maze.path_length()), Some(8));
}
