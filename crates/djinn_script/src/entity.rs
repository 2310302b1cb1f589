//! Entity handle
//!
//! An [`Entity`] is an identifier plus the host that issued it. It owns no
//! state; presence checks and component access are all host round trips.

use crate::components::{Component, Transform};
use crate::ffi::{EntityId, Host};
use crate::input::Input;
use crate::log::Log;
use crate::script::{Script, ScriptObject};
use crate::window::Window;
use djinn_core::math::Vector3;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub struct Entity {
    id: EntityId,
    host: Host,
}

impl Entity {
    pub fn new(id: EntityId, host: Host) -> Self {
        Self { id, host }
    }

    /// Handle carrying the "no entity" sentinel.
    pub fn null(host: Host) -> Self {
        Self::new(EntityId::NULL, host)
    }

    /// Resolve `name` through the host. The returned entity is invalid
    /// (see [`Entity::is_valid`]) when nothing carries that name.
    pub fn find_by_name(host: &Host, name: &str) -> Self {
        let id = host.entity_find_by_name(name);
        Self::new(id, host.clone())
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// `false` only for the null sentinel. Does not ask the host whether the
    /// entity still exists.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null()
    }

    pub fn name(&self) -> String {
        self.host.entity_name(self.id)
    }

    pub fn has_component<T: Component>(&self) -> bool {
        self.host.entity_has_component(self.id, T::KIND)
    }

    /// A fresh wrapper bound to this entity, or `None` if the host reports
    /// the component absent. Wrappers are not cached; see
    /// [`crate::ComponentCache`] for a memoising alternative.
    pub fn get_component<T: Component>(&self) -> Option<T> {
        if self.has_component::<T>() {
            Some(T::bind(self.clone()))
        } else {
            None
        }
    }

    /// The host-held script instance attached to this entity, if any.
    pub fn script_instance(&self) -> Option<ScriptObject> {
        self.host.entity_script_instance(self.id)
    }

    /// The script instance narrowed to `T`; `None` if there is no instance
    /// or it is of another type.
    pub fn as_script<T: Script>(&self) -> Option<Rc<RefCell<T>>> {
        self.script_instance()?.downcast::<T>()
    }

    /// Shortcut for the transform translation, without a presence check.
    pub fn translation(&self) -> Vector3 {
        Transform::bind(self.clone()).translation()
    }

    pub fn set_translation(&self, translation: Vector3) {
        Transform::bind(self.clone()).set_translation(translation);
    }

    pub fn input(&self) -> Input<'_> {
        Input::new(&*self.host)
    }

    pub fn log(&self) -> Log<'_> {
        Log::new(&*self.host)
    }

    pub fn window(&self) -> Window<'_> {
        Window::new(&*self.host)
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.host, &other.host)
    }
}

impl Eq for Entity {}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entity").field(&self.id).finish()
    }
}
