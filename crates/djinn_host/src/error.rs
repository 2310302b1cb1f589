use djinn_script::EntityId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("script class `{class}` is not registered")]
    UnknownScriptClass { class: String },

    #[error("script class `{class}` is already registered")]
    DuplicateScriptClass { class: String },

    #[error("entity {0} does not exist in the scene")]
    UnknownEntity(EntityId),

    #[error("failed to read settings from {path}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings in {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
