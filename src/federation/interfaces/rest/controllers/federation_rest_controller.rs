use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::error;

use crate::{
    config::build_info::BuildInfo,
    federation::{
        domain::{
            model::enums::federation_domain_error::FederationDomainError,
            services::console_login_service::{ConsoleLoginOutcome, ConsoleLoginService},
        },
        interfaces::rest::resources::about_resource::AboutResource,
    },
};

pub const REDIRECT_PATH: &str = "/synapse";
pub const HEALTH_PATH: &str = "/health";
pub const ABOUT_PATH: &str = "/about";

#[derive(Clone)]
pub struct FederationRestControllerState {
    pub console_login_service: Arc<dyn ConsoleLoginService>,
    pub build_info: BuildInfo,
}

pub fn router(state: FederationRestControllerState) -> Router {
    Router::new()
        .route("/", get(begin_login).post(post_not_found))
        .route(REDIRECT_PATH, get(complete_login).post(post_not_found))
        .route(HEALTH_PATH, get(health).post(post_not_found))
        .route(ABOUT_PATH, get(about).post(post_not_found))
        .fallback(fallback)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "federation",
    responses(
        (status = 303, description = "Redirect to the Synapse login page"),
        (status = 500, description = "Configuration or upstream failure")
    )
)]
pub async fn begin_login(
    State(state): State<FederationRestControllerState>,
    headers: HeaderMap,
) -> Response {
    let redirect_back_url = format!("{}{REDIRECT_PATH}", this_endpoint(&headers));
    match state
        .console_login_service
        .begin_login(&redirect_back_url)
        .await
    {
        Ok(authorize_url) => see_other(&authorize_url),
        Err(error) => internal_error(&error),
    }
}

#[derive(Debug, Deserialize)]
pub struct RedirectBackQuery {
    pub code: Option<String>,
}

#[utoipa::path(
    get,
    path = "/synapse",
    tag = "federation",
    responses(
        (status = 303, description = "Redirect to the AWS console session"),
        (status = 200, description = "Team membership guidance page", body = String),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn complete_login(
    State(state): State<FederationRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<RedirectBackQuery>,
) -> Response {
    let endpoint = this_endpoint(&headers);
    let redirect_back_url = format!("{endpoint}{REDIRECT_PATH}");

    let Some(code) = query.code else {
        return internal_error(&FederationDomainError::Upstream(
            "redirect back request is missing the code parameter".to_string(),
        ));
    };

    match state
        .console_login_service
        .complete_login(&code, &redirect_back_url, &endpoint)
        .await
    {
        Ok(ConsoleLoginOutcome::RedirectToConsole { url }) => see_other(&url),
        Ok(ConsoleLoginOutcome::NotAuthorized { team_ids }) => team_guidance_page(&team_ids),
        Err(error) => internal_error(&error),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "federation",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    get,
    path = "/about",
    tag = "federation",
    responses((status = 200, description = "Deployed version", body = AboutResource))
)]
pub async fn about(State(state): State<FederationRestControllerState>) -> Json<AboutResource> {
    Json(AboutResource {
        version: state.build_info.version().to_string(),
    })
}

/// Unknown GETs go back to the service root; POST is not part of the flow.
pub async fn fallback(method: Method, headers: HeaderMap) -> Response {
    if method == Method::POST {
        return post_not_found().await;
    }
    see_other(&this_endpoint(&headers))
}

async fn post_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found.").into_response()
}

fn see_other(location: &str) -> Response {
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Full detail stays in the server log; the client only ever sees a
/// generic page.
fn internal_error(error: &FederationDomainError) -> Response {
    error!(%error, "console login request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<html><head/><body><h3>An error has occurred.</h3></body></html>".to_string()),
    )
        .into_response()
}

fn team_guidance_page(team_ids: &[String]) -> Response {
    let mut body = String::from(
        "<html><head/><body>\
         <h3>To proceed you must be a member of one of these Synapse teams:</h3><ul>",
    );
    for team_id in team_ids {
        let link = format!("https://www.synapse.org/#!Team:{team_id}");
        body.push_str(&format!("<li><a href=\"{link}\">{link}</a></li>"));
    }
    body.push_str("</ul></body></html>");
    Html(body).into_response()
}

/// The externally visible endpoint of this service, reconstructed from the
/// proxy-forwarded scheme and the Host header.
fn this_endpoint(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}
