use std::{path::Path, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use synapse_aws_console_login::{
    aws_integration::application::acl::{
        reqwest_http_get_facade_impl::ReqwestHttpGetFacadeImpl,
        ssm_parameter_store_facade_impl::SsmParameterStoreFacadeImpl,
        sts_assume_role_facade_impl::StsAssumeRoleFacadeImpl,
    },
    config::{
        app_config::AppConfig,
        build_info::{BuildInfo, GIT_PROPERTIES_FILENAME},
        config_resolver::ConfigResolver,
    },
    federation::{
        build_federation_router, interfaces::rest::resources::about_resource::AboutResource,
    },
    synapse_integration::application::acl::reqwest_oauth_token_facade_impl::ReqwestOAuthTokenFacadeImpl,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        synapse_aws_console_login::federation::interfaces::rest::controllers::federation_rest_controller::begin_login,
        synapse_aws_console_login::federation::interfaces::rest::controllers::federation_rest_controller::complete_login,
        synapse_aws_console_login::federation::interfaces::rest::controllers::federation_rest_controller::health,
        synapse_aws_console_login::federation::interfaces::rest::controllers::federation_rest_controller::about
    ),
    components(schemas(AboutResource)),
    tags(
        (name = "federation", description = "Synapse to AWS console federation flow")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let build_info = BuildInfo::load(Path::new(GIT_PROPERTIES_FILENAME))
        .expect("failed to load build information");

    let parameter_store = Arc::new(SsmParameterStoreFacadeImpl::from_environment().await);
    let config_resolver = Arc::new(ConfigResolver::from_process(parameter_store));
    let config = AppConfig::load(&config_resolver)
        .await
        .expect("failed to load application configuration");

    let sts = Arc::new(StsAssumeRoleFacadeImpl::from_environment(&config.aws_region).await);
    let oauth_tokens = Arc::new(ReqwestOAuthTokenFacadeImpl::new(config_resolver.clone()));
    let http_get = Arc::new(ReqwestHttpGetFacadeImpl::new());

    let port = config.port;
    let federation_router = build_federation_router(
        config,
        config_resolver,
        oauth_tokens,
        sts,
        http_get,
        build_info.clone(),
    );

    let app = Router::new()
        .merge(federation_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(version = build_info.version(), %addr, "console login bridge listening");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
