use async_trait::async_trait;

use crate::federation::domain::model::enums::federation_domain_error::FederationDomainError;

/// Outcome of the redirect-back step. Not belonging to any configured team
/// is an expected business outcome rendered as guidance, never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleLoginOutcome {
    RedirectToConsole { url: String },
    NotAuthorized { team_ids: Vec<String> },
}

#[async_trait]
pub trait ConsoleLoginService: Send + Sync {
    /// Builds the Synapse authorization URL the browser is sent to first.
    async fn begin_login(&self, redirect_back_url: &str)
        -> Result<String, FederationDomainError>;

    /// Runs the whole post-login flow: code exchange, claims decoding,
    /// team-to-role resolution, role assumption, console URL construction.
    async fn complete_login(
        &self,
        authorization_code: &str,
        redirect_back_url: &str,
        issuer_url: &str,
    ) -> Result<ConsoleLoginOutcome, FederationDomainError>;
}
