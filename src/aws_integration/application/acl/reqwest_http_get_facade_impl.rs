use async_trait::async_trait;

use crate::aws_integration::{
    domain::model::enums::aws_integration_error::AwsIntegrationError,
    interfaces::acl::http_get_facade::HttpGetFacade,
};

pub struct ReqwestHttpGetFacadeImpl {
    client: reqwest::Client,
}

impl ReqwestHttpGetFacadeImpl {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttpGetFacadeImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpGetFacade for ReqwestHttpGetFacadeImpl {
    async fn fetch(&self, url: &str) -> Result<String, AwsIntegrationError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| AwsIntegrationError::Unavailable(error.to_string()))?;

        response
            .text()
            .await
            .map_err(|error| AwsIntegrationError::Unavailable(error.to_string()))
    }
}
