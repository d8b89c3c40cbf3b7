//! Volunteer handlers

use crate::storage::Store;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use relief_types::{NewVolunteer, Volunteer};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Volunteer>>, StatusCode> {
    match state.store.list_volunteers().await {
        Ok(volunteers) => Ok(Json(volunteers)),
        Err(e) => {
            tracing::error!("Failed to list volunteers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewVolunteer>,
) -> Result<(StatusCode, Json<Volunteer>), StatusCode> {
    match state.store.insert_volunteer(new).await {
        Ok(volunteer) => Ok((StatusCode::CREATED, Json(volunteer))),
        Err(e) => {
            tracing::error!("Failed to register volunteer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
