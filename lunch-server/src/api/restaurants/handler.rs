//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
};
use shared::models::{MessageResponse, Restaurant, RestaurantCreate};

use crate::state::AppState;
use crate::utils::AppResult;

/// GET /api/restaurants - all active restaurants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = state.restaurants.list_all().await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Restaurant>> {
    let Path(id) = id?;
    let restaurant = state.restaurants.get_by_id(id).await?;
    Ok(Json(restaurant))
}

/// POST /api/restaurants - 201 with the stored restaurant
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RestaurantCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    let Json(payload) = payload?;
    let restaurant = state.restaurants.create(payload).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// DELETE /api/restaurants/{id} - soft delete
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let message = state.restaurants.delete(id).await?;
    Ok(Json(message))
}
