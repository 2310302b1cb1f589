//! Script engine
//!
//! Maps script class names to constructors and drives the lifecycle of every
//! instance in a [`SceneHost`]:
//!
//! 1. [`ScriptEngine::start`] instantiates a script for each entity whose
//!    script component names a registered class, then runs `on_create` on
//!    each in spawn order.
//! 2. [`ScriptEngine::frame`] runs `on_early_update` for every instance, then
//!    `on_late_update` for every instance.
//! 3. [`ScriptEngine::stop`] drops all instances.

use crate::error::EngineError;
use crate::scene::SceneHost;
use djinn_script::{Entity, EntityId, Host, Script, ScriptObject};
use std::collections::BTreeMap;
use std::rc::Rc;

type ScriptFactory = Box<dyn Fn(Entity) -> ScriptObject>;

pub struct ScriptEngine {
    scene: Rc<SceneHost>,
    host: Host,
    classes: BTreeMap<String, ScriptFactory>,
    running: bool,
}

impl ScriptEngine {
    pub fn new(scene: Rc<SceneHost>) -> Self {
        let host: Host = scene.clone();
        Self {
            scene,
            host,
            classes: BTreeMap::new(),
            running: false,
        }
    }

    pub fn scene(&self) -> &Rc<SceneHost> {
        &self.scene
    }

    /// The scene as the handle scripts hold.
    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Register a script class under `class_name`. `factory` receives the
    /// entity the instance is bound to.
    pub fn register<T, F>(&mut self, class_name: &str, factory: F) -> Result<(), EngineError>
    where
        T: Script,
        F: Fn(Entity) -> T + 'static,
    {
        if self.classes.contains_key(class_name) {
            return Err(EngineError::DuplicateScriptClass {
                class: class_name.to_owned(),
            });
        }
        tracing::trace!(class = class_name, "registered script class");
        self.classes.insert(
            class_name.to_owned(),
            Box::new(move |entity| ScriptObject::new(factory(entity))),
        );
        Ok(())
    }

    pub fn is_registered(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Construct a `class_name` instance for `id` and attach it to the
    /// entity, replacing any previous instance. `on_create` is not run.
    pub fn create_instance(&self, id: EntityId, class_name: &str) -> Result<ScriptObject, EngineError> {
        let factory = self
            .classes
            .get(class_name)
            .ok_or_else(|| EngineError::UnknownScriptClass {
                class: class_name.to_owned(),
            })?;
        if !self.scene.contains(id) {
            return Err(EngineError::UnknownEntity(id));
        }

        let instance = factory(Entity::new(id, self.host.clone()));
        self.scene.set_script_instance(id, instance.clone());
        Ok(instance)
    }

    /// Instantiate every scripted entity and run `on_create` on each.
    /// Entities naming an unregistered class are skipped with a warning.
    /// Returns the number of instances created.
    pub fn start(&mut self) -> usize {
        if self.running {
            self.stop();
        }

        let mut created = Vec::new();
        for (id, class_name) in self.scene.scripted_entities() {
            match self.create_instance(id, &class_name) {
                Ok(instance) => created.push(instance),
                Err(err) => tracing::warn!(entity = %id, error = %err, "script not instantiated"),
            }
        }

        for instance in &created {
            instance.create();
        }

        self.running = true;
        tracing::info!(instances = created.len(), "script runtime started");
        created.len()
    }

    /// Pre-physics hook for every instance.
    pub fn early_update(&self, dt: f32) {
        for (_, instance) in self.scene.script_instances() {
            instance.early_update(dt);
        }
    }

    /// Post-physics hook for every instance.
    pub fn late_update(&self, dt: f32) {
        for (_, instance) in self.scene.script_instances() {
            instance.late_update(dt);
        }
    }

    /// One simulation frame. The stub scene has no physics step between the
    /// two phases.
    pub fn frame(&self, dt: f32) {
        if !self.running {
            tracing::warn!("frame requested before the script runtime started");
            return;
        }
        self.early_update(dt);
        self.late_update(dt);
    }

    pub fn stop(&mut self) {
        let cleared = self.scene.clear_script_instances();
        self.running = false;
        tracing::info!(instances = cleared, "script runtime stopped");
    }
}

impl Drop for ScriptEngine {
    fn drop(&mut self) {
        if self.running {
            self.scene.clear_script_instances();
        }
    }
}
