use crate::effect::EffectKind;

/// Failure to build a geometry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("ring counts add up to {actual} pixels, geometry holds {expected}")]
    RingMismatch { expected: usize, actual: usize },
}

/// Failure to restore an effect from a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The persisted text is not a JSON object
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    /// The mode is known but its fields are missing or ill-typed
    #[error("invalid fields for {kind} effect: {source}")]
    Fields {
        kind: EffectKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to turn a `mode,...` command line into an effect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("not a mode command: {0:?}")]
    NotAModeCommand(String),
    #[error("unknown effect {0:?}")]
    UnknownEffect(String),
    #[error("{kind} effect expects argument `{name}`")]
    MissingArgument { kind: EffectKind, name: &'static str },
    #[error("invalid value {value:?} for argument `{name}`")]
    InvalidArgument { name: &'static str, value: String },
}

/// Failure to load engine configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed engine config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("frame rate must be positive")]
    ZeroFps,
}
