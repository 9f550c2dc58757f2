// src/routes/analytics.rs

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use super::{Availability, ShiftCard};
use crate::{
    labels,
    views::{analytics::DistributionRow, summarize_metrics, summarize_risk, RiskBand},
    AppState,
};

#[derive(Serialize)]
struct DepartmentBar {
    key: String,
    label: String,
    color: &'static str,
    count: u64,
    percent: f64,
}

#[derive(Serialize)]
struct AnalyticsResponse {
    total_labor_cost: f64,
    coverage_rate: f64,
    total_shifts_scheduled: u64,
    /// Whole percent, as shown on the dashboard.
    utilization_percent: f64,
    departments: Option<Vec<DepartmentBar>>,
    skill_utilization: Option<Vec<DistributionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// GET /api/v1/analytics
pub async fn get_analytics(State(state): State<AppState>) -> Response {
    let snap = state.snapshots.current().await;
    let Some(metrics) = snap.metrics.as_ref() else {
        return Json(Availability::<()>::not_available("Analytics data not available"))
            .into_response();
    };

    let summary = summarize_metrics(metrics);
    let out = AnalyticsResponse {
        total_labor_cost: summary.total_labor_cost,
        coverage_rate: summary.coverage_rate,
        total_shifts_scheduled: summary.total_shifts_scheduled,
        utilization_percent: summary.utilization_percent.round(),
        departments: summary.department_distribution.map(|rows| {
            rows.into_iter()
                .map(|r| DepartmentBar {
                    label: labels::department_label_for_key(&r.key),
                    color: labels::department_color_for_key(&r.key),
                    key: r.key,
                    count: r.count,
                    percent: r.percent,
                })
                .collect()
        }),
        skill_utilization: summary.skill_utilization,
        warning: summary.warning,
    };
    Json(Availability::Available(out)).into_response()
}

#[derive(Serialize)]
struct UnderstaffedRisk<'a> {
    shift_id: &'a str,
    date: Option<NaiveDate>,
    department: Option<&'a str>,
    department_label: Option<String>,
    required: u32,
    assigned: u32,
}

#[derive(Serialize)]
struct TrafficRow<'a> {
    #[serde(flatten)]
    card: ShiftCard<'a>,
    traffic_millions: f64,
}

#[derive(Serialize)]
struct RiskResponse<'a> {
    risk_score: Option<f64>,
    band: RiskBand,
    understaffed_shifts: Vec<UnderstaffedRisk<'a>>,
    high_traffic_risks: Vec<TrafficRow<'a>>,
    recommendations: &'a [String],
    no_significant_risks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a str>,
}

/// GET /api/v1/risk
pub async fn get_risk(State(state): State<AppState>) -> Response {
    let snap = state.snapshots.current().await;
    let Some(risk) = snap.risk.as_ref() else {
        return Json(Availability::<()>::not_available("Risk assessment not available"))
            .into_response();
    };

    let summary = summarize_risk(risk, &snap.catalog);
    let out = RiskResponse {
        risk_score: summary.risk_score,
        band: summary.band,
        understaffed_shifts: summary
            .understaffed_shifts
            .iter()
            .map(|u| UnderstaffedRisk {
                shift_id: &u.shift_id,
                date: u.date,
                department: u.department.as_deref(),
                department_label: u.department.as_deref().map(labels::department_label_for_key),
                required: u.required,
                assigned: u.assigned,
            })
            .collect(),
        high_traffic_risks: summary
            .high_traffic
            .iter()
            .map(|t| TrafficRow { card: ShiftCard::new(t.shift), traffic_millions: t.traffic_millions })
            .collect(),
        recommendations: summary.recommendations,
        no_significant_risks: summary.no_significant_risks,
        warning: summary.warning,
    };
    Json(Availability::Available(out)).into_response()
}
