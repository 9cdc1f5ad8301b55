use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use service::items::domain::Item;

use crate::errors::ApiError;
use crate::startup::AppState;

/// Request body shared by create and update. Both fields are required and
/// replace the stored values wholesale; empty strings are accepted.
#[derive(Debug, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
}

#[utoipa::path(
    get, path = "/items", tag = "items",
    responses(
        (status = 200, description = "All items, id ascending", body = [crate::openapi::ItemDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list().await?;
    info!(count = items.len(), "listed items");
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Matching item", body = crate::openapi::ItemDoc),
        (status = 404, description = "No item with that id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Item>, ApiError> {
    let item = state.items.get(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post, path = "/items", tag = "items",
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 201, description = "Created item with assigned id", body = crate::openapi::ItemDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let created = state.items.create(&input.name, &input.description).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 200, description = "Updated item", body = crate::openapi::ItemDoc),
        (status = 404, description = "No item with that id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, ApiError> {
    let updated = state.items.update(id, &input.name, &input.description).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Deleted, empty body"),
        (status = 404, description = "No item with that id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
