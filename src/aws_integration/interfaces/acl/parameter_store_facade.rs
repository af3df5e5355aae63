use async_trait::async_trait;

use crate::aws_integration::domain::model::enums::aws_integration_error::AwsIntegrationError;

#[async_trait]
pub trait ParameterStoreFacade: Send + Sync {
    /// Fetches a decrypted parameter. `Ok(None)` means the parameter does
    /// not exist; transport and credential failures surface as errors for
    /// the caller to downgrade as its policy dictates.
    async fn get_parameter(&self, name: &str) -> Result<Option<String>, AwsIntegrationError>;
}
