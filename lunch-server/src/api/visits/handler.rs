//! Visit API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
};
use shared::models::{MessageResponse, VisitCreate, VisitUpdate, VisitUpdated, VisitView};

use crate::state::AppState;
use crate::utils::AppResult;

/// GET /api/visits - every visit, most recent first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VisitView>>> {
    let visits = state.visits.list_all_visits().await?;
    Ok(Json(visits))
}

/// POST /api/visits - 201 with the projected visit
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<VisitCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<VisitView>)> {
    let Json(payload) = payload?;
    let visit = state.visits.create_visit(payload).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

/// PUT /api/visits/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<VisitUpdate>, JsonRejection>,
) -> AppResult<Json<VisitUpdated>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let visit = state.visits.update_visit(id, payload).await?;
    Ok(Json(visit))
}

/// DELETE /api/visits/{id} - succeeds whether or not the visit exists
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let message = state.visits.delete_visit(id).await?;
    Ok(Json(message))
}
