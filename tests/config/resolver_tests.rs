use synapse_aws_console_login::config::{
    config_error::ConfigError, config_resolver::ValueSource,
};

use crate::support::create_resolver_harness;

#[tokio::test]
async fn environment_wins_over_every_other_source() {
    let harness = create_resolver_harness(
        &[("AWS_REGION", "us-east-1")],
        &[("AWS_REGION", "eu-west-1")],
        &[("AWS_REGION", "ap-south-1")],
    );

    let resolved = harness
        .resolver
        .resolve("AWS_REGION")
        .await
        .expect("lookup should succeed")
        .expect("value should be present");

    assert_eq!(resolved.value, "us-east-1");
    assert_eq!(resolved.source, ValueSource::Environment);
}

#[tokio::test]
async fn runtime_property_wins_over_file() {
    let harness = create_resolver_harness(
        &[],
        &[("AWS_REGION", "eu-west-1")],
        &[("AWS_REGION", "ap-south-1")],
    );

    let resolved = harness
        .resolver
        .resolve("AWS_REGION")
        .await
        .expect("lookup should succeed")
        .expect("value should be present");

    assert_eq!(resolved.value, "eu-west-1");
    assert_eq!(resolved.source, ValueSource::RuntimeProperty);
}

#[tokio::test]
async fn null_literal_and_empty_values_fall_through() {
    let harness = create_resolver_harness(
        &[("AWS_REGION", "null")],
        &[("AWS_REGION", "")],
        &[("AWS_REGION", "ap-south-1")],
    );

    let resolved = harness
        .resolver
        .resolve("AWS_REGION")
        .await
        .expect("lookup should succeed")
        .expect("value should be present");

    assert_eq!(resolved.value, "ap-south-1");
    assert_eq!(resolved.source, ValueSource::PropertiesFile);
}

#[tokio::test]
async fn empty_key_is_rejected() {
    let harness = create_resolver_harness(&[], &[], &[]);

    let error = harness
        .resolver
        .resolve(" ")
        .await
        .expect_err("empty key must be rejected");

    assert!(matches!(error, ConfigError::EmptyKey));
}

#[tokio::test]
async fn missing_optional_key_resolves_to_none() {
    let harness = create_resolver_harness(&[], &[], &[]);

    let resolved = harness
        .resolver
        .resolve("SESSION_TIMEOUT_SECONDS")
        .await
        .expect("lookup should succeed");

    assert!(resolved.is_none());
}

#[tokio::test]
async fn missing_required_key_errors() {
    let harness = create_resolver_harness(&[], &[], &[]);

    let error = harness
        .resolver
        .resolve_required("TEAM_TO_ROLE_ARN_MAP")
        .await
        .expect_err("required key must error when absent");

    assert!(matches!(error, ConfigError::MissingKey(key) if key == "TEAM_TO_ROLE_ARN_MAP"));
}

#[tokio::test]
async fn secret_reference_resolves_through_parameter_store() {
    let harness = create_resolver_harness(
        &[("SYNAPSE_OAUTH_CLIENT_SECRET", "ssm::oauth-secret")],
        &[],
        &[],
    );
    harness.parameter_store.set_parameter("oauth-secret", "s3cret");

    let resolved = harness
        .resolver
        .resolve("SYNAPSE_OAUTH_CLIENT_SECRET")
        .await
        .expect("lookup should succeed")
        .expect("secret should resolve");

    assert_eq!(resolved.value, "s3cret");
    assert_eq!(resolved.source, ValueSource::SecretStore);
    assert!(!resolved.value.contains("ssm::"));
}

#[tokio::test]
async fn secret_lookups_are_cached_per_parameter_name() {
    let harness = create_resolver_harness(
        &[("SYNAPSE_OAUTH_CLIENT_SECRET", "ssm::oauth-secret")],
        &[],
        &[],
    );
    harness.parameter_store.set_parameter("oauth-secret", "s3cret");

    for _ in 0..3 {
        harness
            .resolver
            .resolve("SYNAPSE_OAUTH_CLIENT_SECRET")
            .await
            .expect("lookup should succeed")
            .expect("secret should resolve");
    }

    assert_eq!(harness.parameter_store.get_calls(), 1);
}

#[tokio::test]
async fn failed_secret_lookup_is_not_cached_and_can_retry() {
    let harness = create_resolver_harness(
        &[("SYNAPSE_OAUTH_CLIENT_SECRET", "ssm::oauth-secret")],
        &[],
        &[],
    );
    harness.parameter_store.set_failing(true);

    let first = harness
        .resolver
        .resolve("SYNAPSE_OAUTH_CLIENT_SECRET")
        .await
        .expect("store failures are swallowed to absent");
    assert!(first.is_none());

    harness.parameter_store.set_failing(false);
    harness.parameter_store.set_parameter("oauth-secret", "s3cret");

    let second = harness
        .resolver
        .resolve("SYNAPSE_OAUTH_CLIENT_SECRET")
        .await
        .expect("lookup should succeed")
        .expect("retry should find the secret without a restart");

    assert_eq!(second.value, "s3cret");
    assert_eq!(harness.parameter_store.get_calls(), 2);
}

#[tokio::test]
async fn missing_required_secret_reports_the_parameter_name() {
    let harness = create_resolver_harness(
        &[("SYNAPSE_OAUTH_CLIENT_SECRET", "ssm::oauth-secret")],
        &[],
        &[],
    );

    let error = harness
        .resolver
        .resolve_required("SYNAPSE_OAUTH_CLIENT_SECRET")
        .await
        .expect_err("unresolvable required secret must error");

    assert!(matches!(error, ConfigError::MissingSecret(name) if name == "oauth-secret"));
}
