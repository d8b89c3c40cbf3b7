//! Helpline handlers

use crate::storage::Store;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use relief_types::{Helpline, NewHelpline};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Helpline>>, StatusCode> {
    match state.store.list_helplines().await {
        Ok(helplines) => Ok(Json(helplines)),
        Err(e) => {
            tracing::error!("Failed to list helplines: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewHelpline>,
) -> Result<(StatusCode, Json<Helpline>), StatusCode> {
    match state.store.insert_helpline(new).await {
        Ok(helpline) => Ok((StatusCode::CREATED, Json(helpline))),
        Err(e) => {
            tracing::error!("Failed to create helpline: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
