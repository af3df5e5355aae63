use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration key is empty")]
    EmptyKey,

    #[error("cannot find value for {0}")]
    MissingKey(String),

    #[error("cannot find value in the parameter store for: {0}")]
    MissingSecret(String),

    #[error("could not find build information in {0}")]
    MissingBuildInfo(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
