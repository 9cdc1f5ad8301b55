use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::startup::AppState;

pub mod items;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Liveness OK", body = crate::openapi::HealthDoc))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Both variants send the landing path to the interactive docs.
async fn root() -> Redirect {
    Redirect::to("/docs")
}

/// Build the full application router; both storage variants share it.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .route("/health", get(health))
        .route("/items", get(items::list).post(items::create))
        .route(
            "/items/:id",
            get(items::get).put(items::update).delete(items::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
