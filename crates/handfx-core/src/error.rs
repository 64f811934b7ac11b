use thiserror::Error;

/// Errors surfaced by the core. None of them is allowed to stop the frame
/// loop; callers log and degrade.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("hand has {found} landmarks, expected {expected}")]
    LandmarkCount { expected: usize, found: usize },

    #[error("hand detector unavailable: {0}")]
    DetectorUnavailable(String),

    #[error("unknown config key `{0}`")]
    UnknownConfigKey(String),

    #[error("invalid value `{value}` for config key `{key}`")]
    InvalidConfigValue { key: String, value: String },

    #[error("unknown mode `{0}`")]
    UnknownMode(String),
}
