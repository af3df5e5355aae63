use std::collections::BTreeSet;

use serde_json::{Map, Value, json};

use crate::federation::domain::model::value_objects::{
    claim_set::TEAM_CLAIM_NAME, team_role_mapping::TeamRoleMapping,
};

pub const SYNAPSE_AUTHORIZE_URL: &str = "https://signin.synapse.org";
const OAUTH_SCOPE: &str = "openid";

/// Builds the Synapse authorization URL, embedding a claims request for the
/// team membership claim (restricted to the configured team allow-list)
/// plus every configured session-name and session-tag claim.
pub fn build_authorize_url(
    client_id: &str,
    redirect_uri: &str,
    mapping: &TeamRoleMapping,
    session_name_claims: &[String],
    session_tag_claims: &[String],
) -> String {
    let claims = claims_request(mapping, session_name_claims, session_tag_claims);
    let claims_parameter = json!({ "id_token": claims, "userinfo": claims }).to_string();

    format!(
        "{SYNAPSE_AUTHORIZE_URL}?response_type=code&client_id={}&redirect_uri={}&scope={OAUTH_SCOPE}&claims={}",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(&claims_parameter),
    )
}

fn claims_request(
    mapping: &TeamRoleMapping,
    session_name_claims: &[String],
    session_tag_claims: &[String],
) -> Value {
    let mut request = Map::new();
    let team_ids: Vec<&str> = mapping.team_ids().collect();
    request.insert(TEAM_CLAIM_NAME.to_string(), json!({ "values": team_ids }));

    // Sorted, deduplicated union; the team claim is never repeated with an
    // essentiality marker.
    let requested: BTreeSet<&str> = session_name_claims
        .iter()
        .chain(session_tag_claims)
        .map(String::as_str)
        .filter(|claim| *claim != TEAM_CLAIM_NAME)
        .collect();
    for claim_name in requested {
        request.insert(claim_name.to_string(), json!({ "essential": true }));
    }

    Value::Object(request)
}
