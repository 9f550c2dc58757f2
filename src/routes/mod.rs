// src/routes/mod.rs

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    labels,
    models::{Employee, Shift},
    AppState,
};

pub mod analytics;
pub mod employees;
pub mod health;
pub mod schedule;
pub mod shifts;
pub mod workforce;

pub fn router(state: AppState) -> Router {
    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health
        .route("/health", get(health::health))
        // snapshot lifecycle
        .route("/api/v1/config/validate", post(workforce::validate_config))
        .route("/api/v1/workforce/load", post(workforce::load_workforce))
        .route("/api/v1/schedule/generate", post(workforce::generate_schedule))
        .route("/api/v1/reset", post(workforce::reset))
        .route("/api/v1/snapshot", get(workforce::snapshot_summary))
        // views
        .route("/api/v1/employees", get(employees::list_employees))
        .route("/api/v1/employees/:id/rota", get(employees::employee_rota))
        .route("/api/v1/shifts", get(shifts::list_shifts))
        .route("/api/v1/schedule", get(schedule::get_schedule))
        .route("/api/v1/analytics", get(analytics::get_analytics))
        .route("/api/v1/risk", get(analytics::get_risk))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ─────────────────────────────────────────────────────────────────────────────
// Display shapes shared by several handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `Json` whose rejections use the same `{"error": ...}` body as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Either the view, or a placeholder saying why there is none.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    NotAvailable { message: String },
}

impl<T> Availability<T> {
    pub fn not_available(message: impl Into<String>) -> Self {
        Availability::NotAvailable { message: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct ShiftCard<'a> {
    #[serde(flatten)]
    pub shift: &'a Shift,
    pub weekday: String,
    pub shift_type_label: &'static str,
    pub department_label: &'static str,
    pub department_color: &'static str,
    pub skill_level_label: &'static str,
    pub priority_label: &'static str,
}

impl<'a> ShiftCard<'a> {
    pub fn new(shift: &'a Shift) -> Self {
        Self {
            shift,
            weekday: shift.date.format("%A").to_string(),
            shift_type_label: labels::shift_type_label(shift.shift_type),
            department_label: labels::department_label(shift.department),
            department_color: labels::department_color(shift.department),
            skill_level_label: labels::skill_level_label(shift.required_skill_level),
            priority_label: labels::priority_label(shift.priority),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeCard<'a> {
    #[serde(flatten)]
    pub employee: &'a Employee,
    pub department_label: &'static str,
    pub department_color: &'static str,
    pub skill_level_label: &'static str,
    pub preferred_shift_label: Option<&'static str>,
}

impl<'a> EmployeeCard<'a> {
    pub fn new(employee: &'a Employee) -> Self {
        Self {
            employee,
            department_label: labels::department_label(employee.department),
            department_color: labels::department_color(employee.department),
            skill_level_label: labels::skill_level_label(employee.skill_level),
            preferred_shift_label: employee.preferred_shift.map(labels::shift_type_label),
        }
    }
}
