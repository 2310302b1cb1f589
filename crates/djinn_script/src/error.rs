use thiserror::Error;

/// Errors raised when a raw host value does not map onto a script-side type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown projection type {0}")]
    UnknownProjectionType(i32),

    #[error("unknown body type {0}")]
    UnknownBodyType(i32),
}
