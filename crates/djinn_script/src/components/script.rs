use super::component_wrapper;
use crate::ffi::ComponentKind;

component_wrapper!(
    /// Marks an entity as driven by a script class.
    ScriptComponent,
    ComponentKind::Script
);

impl ScriptComponent {
    /// Registered class name, e.g. `"Bud.Player"`.
    pub fn script_name(&self) -> String {
        self.entity.host().script_component_name(self.entity.id())
    }
}
