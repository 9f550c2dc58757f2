// src/routes/workforce.rs

use axum::{extract::State, Json};

use super::ApiJson;

use crate::{
    error::{AppError, AppResult},
    models::{config::DistributionCheck, ScheduleConfig},
    snapshot::{Snapshot, SnapshotSummary},
    AppState,
};

/// POST /api/v1/config/validate
///
/// Reports the distribution total without contacting the optimizer.
pub async fn validate_config(ApiJson(cfg): ApiJson<ScheduleConfig>) -> Json<DistributionCheck> {
    Json(cfg.check_distribution())
}

/// POST /api/v1/workforce/load
pub async fn load_workforce(
    State(state): State<AppState>,
    ApiJson(cfg): ApiJson<ScheduleConfig>,
) -> AppResult<Json<SnapshotSummary>> {
    cfg.validate()?;
    let permit = state.snapshots.begin_fetch()?;

    let data = state.source.load_workforce_data(&cfg).await?;
    let next = Snapshot::from_workforce(data, Some(cfg.fingerprint()));
    let summary = next.summary();
    state.snapshots.replace(&permit, next).await;

    Ok(Json(summary))
}

/// POST /api/v1/schedule/generate
pub async fn generate_schedule(
    State(state): State<AppState>,
    ApiJson(cfg): ApiJson<ScheduleConfig>,
) -> AppResult<Json<SnapshotSummary>> {
    cfg.validate()?;
    let permit = state.snapshots.begin_fetch()?;

    let current = state.snapshots.current().await;
    if current.catalog.is_empty() {
        return Err(AppError::Validation(
            "Load workforce data before generating a schedule".into(),
        ));
    }

    let fingerprint = cfg.fingerprint();
    let data = state.source.generate_schedule(&cfg).await?;
    let next = Snapshot::from_schedule(data, Some(fingerprint.clone()));

    // Same config as the load: the new entity sets should cover the old ones.
    if current.config_fingerprint.as_deref() == Some(fingerprint.as_str()) {
        let missing = current.missing_from(&next);
        if !missing.is_empty() {
            tracing::warn!(
                employees = ?missing.employees,
                shifts = ?missing.shifts,
                "generated schedule dropped entities present in the loaded data"
            );
        }
    }

    if let Some(err) = next.metrics.as_ref().and_then(|m| m.error.as_deref()) {
        tracing::warn!(error = err, "optimizer reported an error in its metrics");
    }

    let summary = next.summary();
    state.snapshots.replace(&permit, next).await;
    Ok(Json(summary))
}

/// POST /api/v1/reset
pub async fn reset(State(state): State<AppState>) -> AppResult<Json<SnapshotSummary>> {
    let permit = state.snapshots.begin_fetch()?;
    let next = Snapshot::empty();
    let summary = next.summary();
    state.snapshots.replace(&permit, next).await;
    Ok(Json(summary))
}

/// GET /api/v1/snapshot
pub async fn snapshot_summary(State(state): State<AppState>) -> Json<SnapshotSummary> {
    Json(state.snapshots.current().await.summary())
}
