use std::sync::Arc;

use synapse_aws_console_login::{
    config::{app_config::AppConfig, config_resolver::ConfigResolver},
    federation::application::command_services::console_login_service_impl::ConsoleLoginServiceImpl,
};

use super::{
    fakes::{
        FakeHttpGetFacade, FakeOAuthTokenFacade, FakeStsFacade, UnusedParameterStoreFacade,
        empty_map,
    },
    fixtures::sample_mapping,
};

pub struct FlowHarness {
    pub oauth_tokens: Arc<FakeOAuthTokenFacade>,
    pub sts: Arc<FakeStsFacade>,
    pub http_get: Arc<FakeHttpGetFacade>,
    pub service: Arc<ConsoleLoginServiceImpl>,
}

pub fn create_flow_harness() -> FlowHarness {
    create_flow_harness_with_claims(
        &["userid".to_string()],
        &["userid".to_string(), "team".to_string()],
    )
}

pub fn create_flow_harness_with_claims(
    session_name_claims: &[String],
    session_tag_claims: &[String],
) -> FlowHarness {
    let config = AppConfig {
        port: 8080,
        aws_region: "us-east-1".to_string(),
        console_url:
            "https://us-east-1.console.aws.amazon.com/servicecatalog/home?region=us-east-1#/products"
                .to_string(),
        session_timeout_seconds: 43_200,
        team_role_mapping: sample_mapping(),
        session_name_claims: session_name_claims.to_vec(),
        session_tag_claims: session_tag_claims.to_vec(),
    };

    let resolver = Arc::new(ConfigResolver::new(
        [(
            "SYNAPSE_OAUTH_CLIENT_ID".to_string(),
            "client-abc".to_string(),
        )]
        .into_iter()
        .collect(),
        empty_map(),
        empty_map(),
        Arc::new(UnusedParameterStoreFacade),
    ));

    let oauth_tokens = Arc::new(FakeOAuthTokenFacade::new());
    let sts = Arc::new(FakeStsFacade::new());
    let http_get = Arc::new(FakeHttpGetFacade::new());

    let service = Arc::new(ConsoleLoginServiceImpl::new(
        config,
        resolver,
        oauth_tokens.clone(),
        sts.clone(),
        http_get.clone(),
    ));

    FlowHarness {
        oauth_tokens,
        sts,
        http_get,
        service,
    }
}
