use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use tracing::info;

use crate::{
    aws_integration::interfaces::acl::{http_get_facade::HttpGetFacade, sts_facade::StsFacade},
    config::{
        app_config::{AppConfig, OAUTH_CLIENT_ID_KEY},
        config_resolver::ConfigResolver,
    },
    federation::{
        application::{
            authorization_request_builder::build_authorize_url, claims_decoder,
            console_url_builder::build_console_login_url,
            session_request_builder::build_assume_role_spec,
        },
        domain::{
            model::{
                enums::federation_domain_error::FederationDomainError,
                value_objects::claim_set::TEAM_CLAIM_NAME,
            },
            services::console_login_service::{ConsoleLoginOutcome, ConsoleLoginService},
        },
    },
    synapse_integration::interfaces::acl::oauth_token_facade::OAuthTokenFacade,
};

pub struct ConsoleLoginServiceImpl {
    config: AppConfig,
    config_resolver: Arc<ConfigResolver>,
    oauth_tokens: Arc<dyn OAuthTokenFacade>,
    sts: Arc<dyn StsFacade>,
    http_get: Arc<dyn HttpGetFacade>,
}

impl ConsoleLoginServiceImpl {
    pub fn new(
        config: AppConfig,
        config_resolver: Arc<ConfigResolver>,
        oauth_tokens: Arc<dyn OAuthTokenFacade>,
        sts: Arc<dyn StsFacade>,
        http_get: Arc<dyn HttpGetFacade>,
    ) -> Self {
        Self {
            config,
            config_resolver,
            oauth_tokens,
            sts,
            http_get,
        }
    }
}

#[async_trait]
impl ConsoleLoginService for ConsoleLoginServiceImpl {
    async fn begin_login(
        &self,
        redirect_back_url: &str,
    ) -> Result<String, FederationDomainError> {
        let client_id = self
            .config_resolver
            .resolve_required(OAUTH_CLIENT_ID_KEY)
            .await?
            .value;

        Ok(build_authorize_url(
            &client_id,
            redirect_back_url,
            &self.config.team_role_mapping,
            &self.config.session_name_claims,
            &self.config.session_tag_claims,
        ))
    }

    async fn complete_login(
        &self,
        authorization_code: &str,
        redirect_back_url: &str,
        issuer_url: &str,
    ) -> Result<ConsoleLoginOutcome, FederationDomainError> {
        let id_token = self
            .oauth_tokens
            .exchange_code(authorization_code, redirect_back_url)
            .await
            .map_err(|error| FederationDomainError::Upstream(error.to_string()))?;

        let claims = claims_decoder::decode_unverified(&id_token)?;

        // An absent team claim reads as no memberships at all.
        let claimed_teams: HashSet<String> = claims
            .string_list(TEAM_CLAIM_NAME)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let Some(entry) = self.config.team_role_mapping.resolve(&claimed_teams) else {
            info!("authenticated user belongs to none of the configured teams");
            return Ok(ConsoleLoginOutcome::NotAuthorized {
                team_ids: self
                    .config
                    .team_role_mapping
                    .team_ids()
                    .map(str::to_string)
                    .collect(),
            });
        };

        let spec = build_assume_role_spec(
            &claims,
            &entry.role_arn,
            &entry.team_id,
            &self.config.session_name_claims,
            &self.config.session_tag_claims,
        )?;

        let credentials = self
            .sts
            .assume_role(spec)
            .await
            .map_err(|error| FederationDomainError::Upstream(error.to_string()))?;

        let url = build_console_login_url(
            issuer_url,
            &self.config.console_url,
            self.config.session_timeout_seconds,
            &credentials,
            self.http_get.as_ref(),
        )
        .await?;

        info!(team = entry.team_id, "federated console session issued");
        Ok(ConsoleLoginOutcome::RedirectToConsole { url })
    }
}
