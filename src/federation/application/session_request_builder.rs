use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    aws_integration::interfaces::acl::sts_facade::AssumeRoleSpec,
    federation::domain::model::{
        enums::federation_domain_error::FederationDomainError,
        value_objects::{
            claim_set::{ClaimSet, TEAM_CLAIM_NAME},
            claim_value::ClaimValue,
        },
    },
};

pub const TAG_PREFIX: &str = "synapse-";
pub const NONCE_TAG_NAME: &str = "nonce";
const SESSION_NAME_SEPARATOR: &str = ":";

/// Builds the role-assumption request: namespaced session tags derived from
/// the configured tag claims, a per-request nonce tag, and a human-readable
/// session name.
pub fn build_assume_role_spec(
    claims: &ClaimSet,
    role_arn: &str,
    selected_team: &str,
    session_name_claims: &[String],
    session_tag_claims: &[String],
) -> Result<AssumeRoleSpec, FederationDomainError> {
    let mut tags = HashMap::new();

    for claim_name in session_tag_claims {
        let tag_key = format!("{TAG_PREFIX}{claim_name}");
        if claim_name == TEAM_CLAIM_NAME {
            // The team claim holds the full membership list; a tag value
            // must be a single team, so the resolved one goes in.
            tags.insert(tag_key, selected_team.to_string());
            continue;
        }
        match claims.get(claim_name) {
            Some(ClaimValue::Scalar(value)) => {
                tags.insert(tag_key, value.clone());
            }
            Some(ClaimValue::List(items)) => {
                tags.insert(tag_key, items.join(","));
            }
            None => {}
        }
    }

    // Certain repeated tag combinations trip a console-redirect defect in
    // AWS federation. A per-request random tag guarantees no two requests
    // ever share an identical combination.
    tags.insert(
        format!("{TAG_PREFIX}{NONCE_TAG_NAME}"),
        Uuid::new_v4().to_string(),
    );

    Ok(AssumeRoleSpec {
        role_arn: role_arn.to_string(),
        session_name: build_session_name(claims, session_name_claims)?,
        tags,
    })
}

/// Concatenates the configured session-name claims in order, skipping empty
/// or absent values without leaving separator gaps.
fn build_session_name(
    claims: &ClaimSet,
    session_name_claims: &[String],
) -> Result<String, FederationDomainError> {
    let mut parts: Vec<&str> = Vec::new();
    for claim_name in session_name_claims {
        match claims.get(claim_name) {
            Some(ClaimValue::Scalar(value)) if !value.is_empty() => parts.push(value),
            Some(ClaimValue::Scalar(_)) | None => {}
            Some(ClaimValue::List(_)) => {
                return Err(FederationDomainError::UnexpectedClaimShape {
                    claim: claim_name.clone(),
                });
            }
        }
    }
    Ok(parts.join(SESSION_NAME_SEPARATOR))
}
