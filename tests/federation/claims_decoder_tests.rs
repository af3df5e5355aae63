use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::json;
use synapse_aws_console_login::federation::{
    application::claims_decoder::decode_unverified,
    domain::model::enums::federation_domain_error::FederationDomainError,
};

use crate::support::encode_token;

#[test]
fn decodes_claims_without_checking_the_signature() {
    let token = encode_token(
        &json!({"alg": "RS256", "typ": "JWT"}),
        &json!({"userid": "bob", "team": ["t1", "t2"], "iat": 1700000000}),
        "this-is-not-a-valid-signature",
    );

    let claims = decode_unverified(&token).expect("token should decode");

    assert_eq!(claims.scalar("userid"), Some("bob"));
    assert_eq!(
        claims.string_list("team"),
        Some(vec!["t1".to_string(), "t2".to_string()])
    );
    assert_eq!(claims.scalar("iat"), Some("1700000000"));
}

#[test]
fn two_segment_token_is_rejected() {
    let error = decode_unverified("aGVhZGVy.cGF5bG9hZA").expect_err("must reject");

    assert!(
        matches!(error, FederationDomainError::MalformedToken(message) if message.contains("2"))
    );
}

#[test]
fn four_segment_token_is_rejected() {
    let error = decode_unverified("a.b.c.d").expect_err("must reject");

    assert!(
        matches!(error, FederationDomainError::MalformedToken(message) if message.contains("4"))
    );
}

#[test]
fn non_json_payload_is_rejected() {
    let token = format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#),
        URL_SAFE_NO_PAD.encode("not json"),
    );

    let error = decode_unverified(&token).expect_err("must reject");

    assert!(matches!(error, FederationDomainError::MalformedToken(_)));
}

#[test]
fn null_claims_are_omitted() {
    let token = encode_token(
        &json!({"alg": "none"}),
        &json!({"userid": "bob", "email": null}),
        "sig",
    );

    let claims = decode_unverified(&token).expect("token should decode");

    assert!(claims.get("email").is_none());
}
