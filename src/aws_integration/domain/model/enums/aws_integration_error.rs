use thiserror::Error;

#[derive(Debug, Error)]
pub enum AwsIntegrationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("aws unavailable: {0}")]
    Unavailable(String),
}
