use serde_json::json;

use crate::{
    aws_integration::interfaces::acl::{
        http_get_facade::HttpGetFacade,
        sts_facade::FederatedCredentials,
    },
    federation::domain::model::enums::federation_domain_error::FederationDomainError,
};

pub const AWS_SIGN_IN_URL: &str = "https://signin.aws.amazon.com/federation";

/// Exchanges federated credentials for an AWS console sign-in token and
/// assembles the console login URL. Every inserted segment is
/// percent-encoded: claim-derived values and issuer URLs carry reserved
/// characters, and an unencoded one breaks the login, it is not cosmetic.
pub async fn build_console_login_url(
    issuer_url: &str,
    console_url: &str,
    session_duration_seconds: u32,
    credentials: &FederatedCredentials,
    http_get: &dyn HttpGetFacade,
) -> Result<String, FederationDomainError> {
    let session_json = json!({
        "sessionId": credentials.access_key_id,
        "sessionKey": credentials.secret_access_key,
        "sessionToken": credentials.session_token,
    })
    .to_string();

    let signin_token_url = format!(
        "{AWS_SIGN_IN_URL}?Action=getSigninToken&SessionDuration={session_duration_seconds}&SessionType=json&Session={}",
        urlencoding::encode(&session_json),
    );

    let body = http_get
        .fetch(&signin_token_url)
        .await
        .map_err(|error| FederationDomainError::Upstream(error.to_string()))?;

    let signin_token = parse_signin_token(&body)?;

    Ok(format!(
        "{AWS_SIGN_IN_URL}?Action=login&SigninToken={}&Issuer={}&Destination={}",
        urlencoding::encode(&signin_token),
        urlencoding::encode(issuer_url),
        urlencoding::encode(console_url),
    ))
}

fn parse_signin_token(body: &str) -> Result<String, FederationDomainError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|error| FederationDomainError::SigninTokenExchange(error.to_string()))?;
    value
        .get("SigninToken")
        .and_then(|token| token.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            FederationDomainError::SigninTokenExchange(
                "response is missing SigninToken".to_string(),
            )
        })
}
