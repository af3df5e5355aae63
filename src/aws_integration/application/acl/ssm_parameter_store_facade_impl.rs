use async_trait::async_trait;

use crate::aws_integration::{
    domain::model::enums::aws_integration_error::AwsIntegrationError,
    interfaces::acl::parameter_store_facade::ParameterStoreFacade,
};

pub struct SsmParameterStoreFacadeImpl {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStoreFacadeImpl {
    pub async fn from_environment() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_ssm::Client::new(&config),
        }
    }
}

#[async_trait]
impl ParameterStoreFacade for SsmParameterStoreFacadeImpl {
    async fn get_parameter(&self, name: &str) -> Result<Option<String>, AwsIntegrationError> {
        if name.trim().is_empty() {
            return Err(AwsIntegrationError::InvalidRequest(
                "parameter name cannot be empty".to_string(),
            ));
        }

        let response = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await;

        match response {
            Ok(output) => Ok(output
                .parameter()
                .and_then(|parameter| parameter.value())
                .map(str::to_string)),
            Err(error) => {
                if error
                    .as_service_error()
                    .is_some_and(|service_error| service_error.is_parameter_not_found())
                {
                    Ok(None)
                } else {
                    Err(AwsIntegrationError::Unavailable(error.to_string()))
                }
            }
        }
    }
}
