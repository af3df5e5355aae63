use async_trait::async_trait;

use crate::aws_integration::domain::model::enums::aws_integration_error::AwsIntegrationError;

/// Narrow GET capability used for the sign-in token exchange, injected so
/// that step stays testable without a network.
#[async_trait]
pub trait HttpGetFacade: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, AwsIntegrationError>;
}
