//! Handlers for item endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::items::{CreateItemDto, ItemDto, UpdateItemDto};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single item.
///
/// # Endpoint
///
/// `GET /items/{id}`
///
/// # Errors
///
/// Returns 404 Not Found (empty body) if no item has this id.
pub async fn get_item_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ItemDto>, AppError> {
    let item = state.item_service.get_item(id).await?;
    Ok(Json(item.into()))
}

/// Lists all items.
///
/// # Endpoint
///
/// `GET /items`
///
/// Always succeeds; an empty catalog yields `[]`.
pub async fn get_items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemDto>>, AppError> {
    let items = state.item_service.get_items().await?;
    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// Creates an item.
///
/// # Endpoint
///
/// `POST /items`
///
/// # Request Body
///
/// ```json
/// { "name": "Potion", "price": 9 }
/// ```
///
/// # Response
///
/// 201 Created with the new [`ItemDto`] and a `Location` header pointing at
/// `GET /items/{id}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the name is empty or
/// the price is outside 1–1000.
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let item = state.item_service.create_item(payload).await?;
    let location = format!("/items/{}", item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemDto::from(item)),
    ))
}

/// Replaces an item's name and price.
///
/// # Endpoint
///
/// `PUT /items/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request on invalid input.
/// Returns 404 Not Found if no item has this id.
pub async fn update_item_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state.item_service.update_item(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an item.
///
/// # Endpoint
///
/// `DELETE /items/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no item has this id.
pub async fn delete_item_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.item_service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
