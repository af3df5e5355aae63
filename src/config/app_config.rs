use crate::federation::domain::model::value_objects::team_role_mapping::TeamRoleMapping;

use super::{config_error::ConfigError, config_resolver::ConfigResolver};

pub const PORT_KEY: &str = "PORT";
pub const TEAM_TO_ROLE_MAP_KEY: &str = "TEAM_TO_ROLE_ARN_MAP";
pub const SESSION_TIMEOUT_SECONDS_KEY: &str = "SESSION_TIMEOUT_SECONDS";
pub const AWS_REGION_KEY: &str = "AWS_REGION";
pub const SESSION_NAME_CLAIMS_KEY: &str = "SESSION_NAME_CLAIMS";
pub const SESSION_TAG_CLAIMS_KEY: &str = "SESSION_TAG_CLAIMS";
pub const OAUTH_CLIENT_ID_KEY: &str = "SYNAPSE_OAUTH_CLIENT_ID";
pub const OAUTH_CLIENT_SECRET_KEY: &str = "SYNAPSE_OAUTH_CLIENT_SECRET";

const PORT_DEFAULT: u16 = 8080;
const SESSION_TIMEOUT_SECONDS_DEFAULT: u32 = 43_200;
const SESSION_CLAIMS_DEFAULT: &str = "userid";

/// Startup configuration, resolved once and passed to every component.
///
/// The OAuth client id and secret are deliberately not frozen in here:
/// they are resolved per request through the [`ConfigResolver`], so
/// parameter-store-backed secrets get lazy lookup plus caching.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub aws_region: String,
    pub console_url: String,
    pub session_timeout_seconds: u32,
    pub team_role_mapping: TeamRoleMapping,
    pub session_name_claims: Vec<String>,
    pub session_tag_claims: Vec<String>,
}

impl AppConfig {
    pub async fn load(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let port = match resolver.resolve(PORT_KEY).await? {
            Some(resolved) => parse_number(PORT_KEY, &resolved.value)?,
            None => PORT_DEFAULT,
        };

        let aws_region = resolver.resolve_required(AWS_REGION_KEY).await?.value;

        let mapping_json = resolver.resolve_required(TEAM_TO_ROLE_MAP_KEY).await?.value;
        let team_role_mapping = TeamRoleMapping::from_json(&mapping_json)?;

        let session_timeout_seconds = match resolver.resolve(SESSION_TIMEOUT_SECONDS_KEY).await? {
            Some(resolved) => parse_number(SESSION_TIMEOUT_SECONDS_KEY, &resolved.value)?,
            None => SESSION_TIMEOUT_SECONDS_DEFAULT,
        };

        let session_name_claims = claim_list(resolver, SESSION_NAME_CLAIMS_KEY).await?;
        let session_tag_claims = claim_list(resolver, SESSION_TAG_CLAIMS_KEY).await?;

        Ok(Self {
            port,
            console_url: console_destination_url(&aws_region),
            aws_region,
            session_timeout_seconds,
            team_role_mapping,
            session_name_claims,
            session_tag_claims,
        })
    }
}

/// The console destination users land on after federation.
pub fn console_destination_url(region: &str) -> String {
    format!("https://{region}.console.aws.amazon.com/servicecatalog/home?region={region}#/products")
}

async fn claim_list(resolver: &ConfigResolver, key: &str) -> Result<Vec<String>, ConfigError> {
    let raw = resolver
        .resolve(key)
        .await?
        .map(|resolved| resolved.value)
        .unwrap_or_else(|| SESSION_CLAIMS_DEFAULT.to_string());
    Ok(raw
        .split(',')
        .map(|claim| claim.trim().to_string())
        .filter(|claim| !claim.is_empty())
        .collect())
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: format!("not a number: {value}"),
    })
}
