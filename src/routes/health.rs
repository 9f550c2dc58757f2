// src/routes/health.rs

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub version: &'static str,
    pub snapshot_id: Uuid,
    pub data_loaded: bool,
    pub has_schedule: bool,
    pub fetch_in_progress: bool,
}

/// Liveness, plus enough snapshot state to tell an empty service from a loaded one.
pub async fn health(State(state): State<AppState>) -> Json<HealthResp> {
    let snap = state.snapshots.current().await;
    Json(HealthResp {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        snapshot_id: snap.id,
        data_loaded: !snap.catalog.is_empty(),
        has_schedule: snap.has_schedule,
        fetch_in_progress: state.snapshots.is_fetching(),
    })
}
