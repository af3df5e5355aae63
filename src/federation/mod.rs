use std::sync::Arc;

use axum::Router;

use crate::{
    aws_integration::interfaces::acl::{http_get_facade::HttpGetFacade, sts_facade::StsFacade},
    config::{app_config::AppConfig, build_info::BuildInfo, config_resolver::ConfigResolver},
    federation::{
        application::command_services::console_login_service_impl::ConsoleLoginServiceImpl,
        interfaces::rest::controllers::federation_rest_controller::{
            FederationRestControllerState, router,
        },
    },
    synapse_integration::interfaces::acl::oauth_token_facade::OAuthTokenFacade,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_federation_router(
    config: AppConfig,
    config_resolver: Arc<ConfigResolver>,
    oauth_tokens: Arc<dyn OAuthTokenFacade>,
    sts: Arc<dyn StsFacade>,
    http_get: Arc<dyn HttpGetFacade>,
    build_info: BuildInfo,
) -> Router {
    let console_login_service = Arc::new(ConsoleLoginServiceImpl::new(
        config,
        config_resolver,
        oauth_tokens,
        sts,
        http_get,
    ));

    router(FederationRestControllerState {
        console_login_service,
        build_info,
    })
}
