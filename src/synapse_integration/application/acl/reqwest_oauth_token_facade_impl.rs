use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{
        app_config::{OAUTH_CLIENT_ID_KEY, OAUTH_CLIENT_SECRET_KEY},
        config_resolver::ConfigResolver,
    },
    synapse_integration::{
        domain::model::enums::synapse_integration_error::SynapseIntegrationError,
        interfaces::acl::oauth_token_facade::OAuthTokenFacade,
    },
};

pub const SYNAPSE_TOKEN_URL: &str = "https://repo-prod.prod.sagebase.org/auth/v1/oauth2/token";

/// Authorization-code exchange against the Synapse token endpoint. Client
/// credentials are resolved per call so parameter-store-backed secrets are
/// fetched lazily and cached by the resolver.
pub struct ReqwestOAuthTokenFacadeImpl {
    client: reqwest::Client,
    token_url: String,
    config_resolver: Arc<ConfigResolver>,
}

impl ReqwestOAuthTokenFacadeImpl {
    pub fn new(config_resolver: Arc<ConfigResolver>) -> Self {
        Self::with_token_url(SYNAPSE_TOKEN_URL.to_string(), config_resolver)
    }

    pub fn with_token_url(token_url: String, config_resolver: Arc<ConfigResolver>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url,
            config_resolver,
        }
    }
}

#[async_trait]
impl OAuthTokenFacade for ReqwestOAuthTokenFacadeImpl {
    async fn exchange_code(
        &self,
        authorization_code: &str,
        redirect_uri: &str,
    ) -> Result<String, SynapseIntegrationError> {
        let client_id = self
            .config_resolver
            .resolve_required(OAUTH_CLIENT_ID_KEY)
            .await
            .map_err(|error| SynapseIntegrationError::Exchange(error.to_string()))?
            .value;
        let client_secret = self
            .config_resolver
            .resolve_required(OAUTH_CLIENT_SECRET_KEY)
            .await
            .map_err(|error| SynapseIntegrationError::Exchange(error.to_string()))?
            .value;

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&client_id, Some(&client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", authorization_code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|error| SynapseIntegrationError::Exchange(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| SynapseIntegrationError::Exchange(error.to_string()))?;
        if !status.is_success() {
            return Err(SynapseIntegrationError::Exchange(format!(
                "token endpoint returned {status}"
            )));
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|error| SynapseIntegrationError::MalformedResponse(error.to_string()))?;
        value
            .get("id_token")
            .and_then(|token| token.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                SynapseIntegrationError::MalformedResponse(
                    "token response is missing id_token".to_string(),
                )
            })
    }
}
