//! Script lifecycle
//!
//! A script is a behaviour object bound to one entity. The host creates it,
//! calls [`Script::on_create`] once, then each simulation frame calls
//! [`Script::on_early_update`] before physics and [`Script::on_late_update`]
//! after it.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Per-entity behaviour driven by host lifecycle calls.
///
/// All hooks default to doing nothing. Scripts written against a single
/// per-frame hook implement [`Script::on_update`]; the default
/// [`Script::on_early_update`] forwards to it.
pub trait Script: Any {
    fn on_create(&mut self) {}

    fn on_update(&mut self, _dt: f32) {}

    /// Runs each frame before the physics step.
    fn on_early_update(&mut self, dt: f32) {
        self.on_update(dt);
    }

    /// Runs each frame after the physics step.
    fn on_late_update(&mut self, _dt: f32) {}
}

/// Shared handle to a host-held script instance.
///
/// Cloning shares the instance. The same allocation is visible both as a
/// `dyn Script` for lifecycle calls and as `dyn Any` for narrowing to the
/// concrete behaviour type.
#[derive(Clone)]
pub struct ScriptObject {
    behaviour: Rc<RefCell<dyn Script>>,
    instance: Rc<dyn Any>,
    type_name: &'static str,
}

impl ScriptObject {
    pub fn new<T: Script>(script: T) -> Self {
        let cell = Rc::new(RefCell::new(script));
        let behaviour: Rc<RefCell<dyn Script>> = cell.clone();
        Self {
            behaviour,
            instance: cell,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified Rust type name of the behaviour.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Script>(&self) -> bool {
        self.instance.is::<RefCell<T>>()
    }

    /// Narrow to a concrete behaviour type; `None` on mismatch.
    pub fn downcast<T: Script>(&self) -> Option<Rc<RefCell<T>>> {
        self.instance.clone().downcast::<RefCell<T>>().ok()
    }

    /// Whether both handles share one instance.
    pub fn ptr_eq(&self, other: &ScriptObject) -> bool {
        Rc::ptr_eq(&self.instance, &other.instance)
    }

    /// Run `on_create`. Returns `false` if the instance is already borrowed,
    /// i.e. a script tried to drive itself re-entrantly.
    pub fn create(&self) -> bool {
        self.with_behaviour("on_create", |script| script.on_create())
    }

    pub fn early_update(&self, dt: f32) -> bool {
        self.with_behaviour("on_early_update", |script| script.on_early_update(dt))
    }

    pub fn late_update(&self, dt: f32) -> bool {
        self.with_behaviour("on_late_update", |script| script.on_late_update(dt))
    }

    fn with_behaviour(&self, hook: &str, f: impl FnOnce(&mut dyn Script)) -> bool {
        match self.behaviour.try_borrow_mut() {
            Ok(mut script) => {
                f(&mut *script);
                true
            }
            Err(_) => {
                tracing::warn!(script = self.type_name, hook, "script instance is already in use, skipping hook");
                false
            }
        }
    }
}

impl fmt::Debug for ScriptObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptObject")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        created: u32,
        updates: u32,
        late: u32,
    }

    impl Script for Counter {
        fn on_create(&mut self) {
            self.created += 1;
        }

        fn on_update(&mut self, _dt: f32) {
            self.updates += 1;
        }

        fn on_late_update(&mut self, _dt: f32) {
            self.late += 1;
        }
    }

    struct Silent;
    impl Script for Silent {}

    #[test]
    fn early_update_defaults_to_on_update() {
        let object = ScriptObject::new(Counter::default());
        assert!(object.create());
        assert!(object.early_update(0.016));
        assert!(object.late_update(0.016));

        let counter = object.downcast::<Counter>().unwrap();
        let counter = counter.borrow();
        assert_eq!((counter.created, counter.updates, counter.late), (1, 1, 1));
    }

    #[test]
    fn downcast_checks_type() {
        let object = ScriptObject::new(Silent);
        assert!(object.is::<Silent>());
        assert!(!object.is::<Counter>());
        assert!(object.downcast::<Counter>().is_none());
        assert!(object.downcast::<Silent>().is_some());
        assert!(object.type_name().ends_with("Silent"));
    }

    #[test]
    fn clones_share_instance() {
        let object = ScriptObject::new(Counter::default());
        let other = object.clone();
        other.early_update(0.1);
        assert!(object.ptr_eq(&other));
        assert_eq!(object.downcast::<Counter>().unwrap().borrow().updates, 1);
    }

    #[test]
    fn reentrant_hook_is_skipped() {
        let object = ScriptObject::new(Counter::default());
        let held = object.downcast::<Counter>().unwrap();
        let _guard = held.borrow_mut();
        assert!(!object.early_update(0.1));
    }
}
