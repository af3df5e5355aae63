use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynapseIntegrationError {
    #[error("authorization code exchange failed: {0}")]
    Exchange(String),

    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}
