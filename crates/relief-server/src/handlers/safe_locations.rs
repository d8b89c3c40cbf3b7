//! Safe location handlers

use crate::storage::Store;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use relief_types::{NewSafeLocation, SafeLocation};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SafeLocation>>, StatusCode> {
    match state.store.list_safe_locations().await {
        Ok(locations) => Ok(Json(locations)),
        Err(e) => {
            tracing::error!("Failed to list safe locations: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewSafeLocation>,
) -> Result<(StatusCode, Json<SafeLocation>), StatusCode> {
    match state.store.insert_safe_location(new).await {
        Ok(location) => Ok((StatusCode::CREATED, Json(location))),
        Err(e) => {
            tracing::error!("Failed to create safe location: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
