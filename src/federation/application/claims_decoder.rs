use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};

use crate::federation::domain::model::{
    enums::federation_domain_error::FederationDomainError, value_objects::claim_set::ClaimSet,
};

/// Decodes the claims of a compact ID token without verifying its
/// signature. The token is only ever obtained through the authenticated,
/// TLS-protected code exchange with Synapse; the transport is trusted, the
/// envelope is not re-checked here.
pub fn decode_unverified(token: &str) -> Result<ClaimSet, FederationDomainError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(FederationDomainError::MalformedToken(format!(
            "expected three sections of the token but found {}",
            segments.len()
        )));
    }

    // Signature segment dropped; the header is checked for structure only.
    decode_json_segment(segments[0])?;
    let payload = decode_json_segment(segments[1])?;

    Ok(ClaimSet::from_json_object(&payload))
}

fn decode_json_segment(segment: &str) -> Result<Map<String, Value>, FederationDomainError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|error| FederationDomainError::MalformedToken(error.to_string()))?;
    serde_json::from_slice(&bytes)
        .map_err(|error| FederationDomainError::MalformedToken(error.to_string()))
}
