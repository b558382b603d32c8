use std::any::Any;
use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route,
    http::StatusCode,
    middleware::{CatchPanic, Tracing},
    web::Json,
};
use poem_openapi::OpenApiService;
use serde_json::json;
use tracing::error;

use crate::presentation::http::{
    endpoints::{
        root::{ApiState, Endpoints},
        users::UsersEndpoints,
    },
    middleware::ClientIpResolver,
};

pub mod endpoints;
pub mod mappers;
pub mod middleware;
pub mod requests;
pub mod responses;

/// Routes plus the middleware pipeline, outermost last.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (Endpoints, UsersEndpoints::new(state)),
        "Person Users API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(ClientIpResolver)
        .with(Tracing)
        .with(CatchPanic::new().with_handler(panic_response))
}

/// Keeps panics inside the `{error}` JSON contract.
fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    Json(json!({ "error": "internal server error" }))
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
