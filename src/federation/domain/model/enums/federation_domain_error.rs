use thiserror::Error;

use crate::config::config_error::ConfigError;

#[derive(Debug, Error)]
pub enum FederationDomainError {
    #[error("malformed identity token: {0}")]
    MalformedToken(String),

    #[error("claim '{claim}' does not have the expected shape")]
    UnexpectedClaimShape { claim: String },

    #[error("upstream call failed: {0}")]
    Upstream(String),

    #[error("sign-in token exchange failed: {0}")]
    SigninTokenExchange(String),

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}
