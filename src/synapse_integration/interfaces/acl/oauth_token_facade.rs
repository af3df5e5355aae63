use async_trait::async_trait;

use crate::synapse_integration::domain::model::enums::synapse_integration_error::SynapseIntegrationError;

#[async_trait]
pub trait OAuthTokenFacade: Send + Sync {
    /// Exchanges an authorization code for the compact ID token issued by
    /// Synapse. The exchange runs over TLS with client authentication;
    /// downstream claim decoding trusts this transport and does not verify
    /// the token signature.
    async fn exchange_code(
        &self,
        authorization_code: &str,
        redirect_uri: &str,
    ) -> Result<String, SynapseIntegrationError>;
}
