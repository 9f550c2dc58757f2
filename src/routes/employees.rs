// src/routes/employees.rs

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use super::{EmployeeCard, ShiftCard};
use crate::{
    error::{AppError, AppResult},
    views::personal_rota,
    AppState,
};

#[derive(Serialize)]
struct EmployeeRow<'a> {
    #[serde(flatten)]
    card: EmployeeCard<'a>,
    assigned_shifts: usize,
}

/// GET /api/v1/employees
pub async fn list_employees(State(state): State<AppState>) -> Response {
    let snap = state.snapshots.current().await;
    let rows: Vec<EmployeeRow<'_>> = snap
        .catalog
        .employees()
        .iter()
        .map(|e| EmployeeRow {
            card: EmployeeCard::new(e),
            assigned_shifts: snap.index.shifts_for(&e.id).len(),
        })
        .collect();
    Json(rows).into_response()
}

#[derive(Serialize)]
struct RotaShift<'a> {
    #[serde(flatten)]
    card: ShiftCard<'a>,
    hours: u32,
}

#[derive(Serialize)]
struct RotaWeek<'a> {
    week_start: NaiveDate,
    shifts: Vec<RotaShift<'a>>,
}

#[derive(Serialize)]
struct Overtime {
    scheduled_hours: u32,
    max_hours_per_week: f64,
    message: String,
}

#[derive(Serialize)]
struct RotaResponse<'a> {
    employee: EmployeeCard<'a>,
    weeks: Vec<RotaWeek<'a>>,
    total_shifts: usize,
    total_hours: u32,
    total_cost: f64,
    overtime: Option<Overtime>,
}

/// GET /api/v1/employees/:id/rota
pub async fn employee_rota(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snap = state.snapshots.current().await;
    let employee = snap
        .catalog
        .employee(&id)
        .ok_or_else(|| AppError::NotFound(format!("employee {id}")))?;

    let rota = personal_rota(employee, &snap.catalog, &snap.index);

    let out = RotaResponse {
        employee: EmployeeCard::new(employee),
        weeks: rota
            .weeks
            .iter()
            .map(|w| RotaWeek {
                week_start: w.week_start,
                shifts: w
                    .items
                    .iter()
                    .map(|e| RotaShift { card: ShiftCard::new(e.shift), hours: e.hours })
                    .collect(),
            })
            .collect(),
        total_shifts: rota.total_shifts,
        total_hours: rota.total_hours,
        total_cost: rota.total_cost,
        overtime: rota.overtime.as_ref().map(|o| Overtime {
            scheduled_hours: o.scheduled_hours,
            max_hours_per_week: o.max_hours_per_week,
            message: format!(
                "This employee is scheduled for {}h, exceeding their maximum of {}h per week.",
                o.scheduled_hours, o.max_hours_per_week
            ),
        }),
    };
    Ok(Json(out).into_response())
}
