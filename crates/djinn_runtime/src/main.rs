//! Djinn Runtime
//!
//! Boots a demo scene on the stub host, runs the sandbox scripts for a fixed
//! number of frames with scripted input, and reports what they asked of the
//! physics world.
//!
//! Usage: `djinn [--frames N] [settings.json]`

use anyhow::{Context, Result};
use clap::Parser;
use djinn_core::math::Vector3;
use djinn_core::time::FrameClock;
use djinn_host::{
    CameraData, CircleColliderData, EntityBuilder, PhysicsCommand, RectColliderData,
    RigidBodyData, SceneHost, ScriptData, ScriptEngine, Settings, TransformData,
};
use djinn_sandbox::{CameraFollow, MazeGenerator, Moveable, Player, SandboxConfig};
use djinn_script::KeyCode;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "djinn")]
#[command(version = djinn_core::VERSION)]
#[command(about = "Runs the Djinn sandbox scripts on a stub scene", long_about = None)]
struct Args {
    /// Path to a settings file (JSON); defaults are used when omitted
    #[arg(env = "DJINN_SETTINGS")]
    settings: Option<PathBuf>,

    /// Override the number of simulated frames
    #[arg(short, long)]
    frames: Option<u64>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(frames) = self.frames {
            settings.simulation.frames = frames;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Djinn Runtime v{}", djinn_core::VERSION);
    if let Some(path) = &args.settings {
        tracing::info!(path = %path.display(), "loaded settings");
    }

    let scene = Rc::new(SceneHost::new(
        settings.window.width as f32,
        settings.window.height as f32,
    ));
    build_demo_scene(&scene);

    let mut engine = ScriptEngine::new(scene.clone());
    let mut config = SandboxConfig::default();
    config.player.wasd = true;
    config.player.ignore_gravity = true;
    djinn_sandbox::register_all_with(&mut engine, &config)?;

    let instances = engine.start();
    tracing::info!(instances, entities = scene.len(), "scene started");

    let mut clock = FrameClock::new(settings.simulation.timestep_hz);
    let mut totals = CommandTotals::default();
    for _ in 0..settings.simulation.frames {
        apply_scripted_input(&scene, &clock);
        engine.frame(clock.dt());
        totals.record(&scene.take_physics_commands());
        clock.advance_tick();

        if clock.tick_count() % u64::from(clock.tick_rate_hz()) == 0 {
            tracing::debug!(tick = clock.tick_count(), ?totals, "simulation progress");
        }
    }

    engine.stop();
    tracing::info!(
        ticks = clock.tick_count(),
        seconds = clock.total_time().as_secs_f32(),
        forces = totals.forces,
        impulses = totals.impulses,
        torques = totals.torques,
        "simulation finished"
    );
    Ok(())
}

fn build_demo_scene(scene: &SceneHost) {
    scene.spawn(
        EntityBuilder::new("circle")
            .with(TransformData::at(Vector3::new(0.0, 1.0, 0.0)))
            .with(RigidBodyData::dynamic())
            .with(CircleColliderData::default())
            .with(ScriptData::new(Player::CLASS_NAME)),
    );
    scene.spawn(
        EntityBuilder::new("crate")
            .with(TransformData::at(Vector3::new(3.0, 0.0, 0.0)))
            .with(RigidBodyData::dynamic())
            .with(RectColliderData::default())
            .with(ScriptData::new(Moveable::CLASS_NAME)),
    );
    scene.spawn(
        EntityBuilder::new("camera")
            .with(TransformData::at(Vector3::new(0.0, 0.0, 10.0)))
            .with(CameraData::perspective())
            .with(ScriptData::new(CameraFollow::CLASS_NAME)),
    );
    scene.spawn(EntityBuilder::new("maze").with(ScriptData::new(MazeGenerator::CLASS_NAME)));
    scene.spawn(
        EntityBuilder::new("floor")
            .with(TransformData::default().with_scale(Vector3::new(20.0, 1.0, 1.0)))
            .with(RigidBodyData::default())
            .with(RectColliderData::default()),
    );
}

/// Hold a different movement key during each second of simulation.
fn apply_scripted_input(scene: &SceneHost, clock: &FrameClock) {
    const SCHEDULE: [KeyCode; 4] = [KeyCode::W, KeyCode::D, KeyCode::S, KeyCode::A];

    let second = clock.tick_count() / u64::from(clock.tick_rate_hz());
    let key = SCHEDULE[(second % SCHEDULE.len() as u64) as usize];
    scene.release_all();
    scene.press_key(key);
}

#[derive(Debug, Default)]
struct CommandTotals {
    forces: usize,
    impulses: usize,
    torques: usize,
}

impl CommandTotals {
    fn record(&mut self, commands: &[PhysicsCommand]) {
        for command in commands {
            match command {
                PhysicsCommand::Force { .. } => self.forces += 1,
                PhysicsCommand::LinearImpulse { .. } => self.impulses += 1,
                PhysicsCommand::Torque { .. } => self.torques += 1,
            }
        }
    }
}
