// src/routes/shifts.rs

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::ShiftCard;
use crate::{views::sort_chronologically, AppState};

#[derive(Serialize)]
struct ShiftRow<'a> {
    #[serde(flatten)]
    card: ShiftCard<'a>,
    assigned_count: usize,
}

/// GET /api/v1/shifts
pub async fn list_shifts(State(state): State<AppState>) -> Response {
    let snap = state.snapshots.current().await;
    let mut rows: Vec<ShiftRow<'_>> = snap
        .catalog
        .shifts()
        .iter()
        .map(|s| ShiftRow {
            card: ShiftCard::new(s),
            assigned_count: snap.index.employees_for(&s.id).len(),
        })
        .collect();
    sort_chronologically(&mut rows, |r| r.card.shift);
    Json(rows).into_response()
}
