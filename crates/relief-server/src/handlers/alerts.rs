//! Alert handlers

use crate::storage::{Store, RECENT_ALERT_LIMIT};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use relief_types::{Alert, NewAlert};

/// The ten most recent alerts, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Alert>>, StatusCode> {
    match state.store.recent_alerts(RECENT_ALERT_LIMIT).await {
        Ok(alerts) => Ok(Json(alerts)),
        Err(e) => {
            tracing::error!("Failed to list alerts: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewAlert>,
) -> Result<(StatusCode, Json<Alert>), StatusCode> {
    match state.store.insert_alert(new).await {
        Ok(alert) => Ok((StatusCode::CREATED, Json(alert))),
        Err(e) => {
            tracing::error!("Failed to create alert: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
