// src/routes/schedule.rs

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::{Availability, ShiftCard};
use crate::{
    views::{filtered_schedule_view, ScheduleFilter},
    AppState,
};

#[derive(Serialize)]
struct Assignee<'a> {
    id: &'a str,
    /// Falls back to the id when the employee is not in the catalog.
    name: &'a str,
    known: bool,
}

#[derive(Serialize)]
struct ScheduleRow<'a> {
    #[serde(flatten)]
    card: ShiftCard<'a>,
    assigned: Vec<Assignee<'a>>,
    assigned_count: usize,
    understaffed: bool,
    shortfall: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

#[derive(Serialize)]
struct ScheduleResponse<'a> {
    /// Mapping entries as delivered, before unknown shifts are dropped.
    shifts_scheduled: usize,
    coverage_rate: Option<f64>,
    understaffed_count: usize,
    rows: Vec<ScheduleRow<'a>>,
}

/// GET /api/v1/schedule?department=&from=&to=&understaffed_only=
pub async fn get_schedule(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> Response {
    let snap = state.snapshots.current().await;
    if !snap.has_schedule {
        return Json(Availability::<()>::not_available(
            "No schedule generated yet. Load data and generate a schedule.",
        ))
        .into_response();
    }

    let rows: Vec<ScheduleRow<'_>> = filtered_schedule_view(&snap.catalog, &snap.index, &filter)
        .into_iter()
        .map(|r| ScheduleRow {
            card: ShiftCard::new(r.shift),
            assigned: r
                .employee_ids
                .iter()
                .map(|id| match snap.catalog.employee(id) {
                    Some(e) => Assignee { id, name: &e.name, known: true },
                    None => Assignee { id, name: id, known: false },
                })
                .collect(),
            assigned_count: r.assigned_count(),
            understaffed: r.understaffed,
            shortfall: r.shortfall,
            warning: r.understaffed.then(|| format!("Understaffed (needs {} more)", r.shortfall)),
        })
        .collect();

    let out = ScheduleResponse {
        shifts_scheduled: snap.index.entries().count(),
        coverage_rate: snap.metrics.as_ref().and_then(|m| m.coverage_rate),
        understaffed_count: rows.iter().filter(|r| r.understaffed).count(),
        rows,
    };
    Json(Availability::Available(out)).into_response()
}
