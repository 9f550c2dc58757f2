// src/views/analytics.rs

use serde::Serialize;

use super::{catalog::EntityCatalog, order::sort_chronologically};
use crate::models::{Metrics, RiskAssessment, Shift, UnderstaffedShiftRisk};

// ───────────────────────────────────────
// Safe arithmetic
// ───────────────────────────────────────

/// Share of employees that were given at least one shift, in percent.
pub fn utilization_percent(metrics: &Metrics) -> f64 {
    match metrics.total_employees {
        Some(total) if total > 0 => {
            let idle = metrics.idle_employees_count.unwrap_or(0).min(total);
            (total - idle) as f64 / total as f64 * 100.0
        }
        _ => 0.0,
    }
}

/// Width of a department bar relative to all scheduled shifts, in percent.
pub fn department_bar_percent(count: u64, total_shifts_scheduled: Option<u64>) -> f64 {
    match total_shifts_scheduled {
        Some(total) if total > 0 => count as f64 / total as f64 * 100.0,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

pub fn risk_band(risk_score: Option<f64>) -> RiskBand {
    match risk_score {
        Some(s) if s > 20.0 => RiskBand::High,
        Some(s) if s > 10.0 => RiskBand::Medium,
        _ => RiskBand::Low,
    }
}

// ───────────────────────────────────────
// Summaries
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRow {
    pub key: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_labor_cost: f64,
    pub coverage_rate: f64,
    pub total_shifts_scheduled: u64,
    pub utilization_percent: f64,
    /// `None` when the optimizer did not report a distribution.
    pub department_distribution: Option<Vec<DistributionRow>>,
    pub skill_utilization: Option<Vec<DistributionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub fn summarize_metrics(metrics: &Metrics) -> AnalyticsSummary {
    let total = metrics.total_shifts_scheduled;
    let rows = |map: &std::collections::BTreeMap<String, u64>| -> Vec<DistributionRow> {
        map.iter()
            .map(|(key, &count)| DistributionRow {
                key: key.clone(),
                count,
                percent: department_bar_percent(count, total),
            })
            .collect()
    };

    AnalyticsSummary {
        total_labor_cost: metrics.total_labor_cost.unwrap_or(0.0),
        coverage_rate: metrics.coverage_rate.unwrap_or(0.0),
        total_shifts_scheduled: total.unwrap_or(0),
        utilization_percent: utilization_percent(metrics),
        department_distribution: metrics.department_distribution.as_ref().map(rows),
        skill_utilization: metrics.skill_utilization.as_ref().map(rows),
        warning: metrics.error.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficRisk<'a> {
    pub shift: &'a Shift,
    pub traffic_millions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary<'a> {
    pub risk_score: Option<f64>,
    pub band: RiskBand,
    pub understaffed_shifts: &'a [UnderstaffedShiftRisk],
    pub high_traffic: Vec<TrafficRisk<'a>>,
    pub recommendations: &'a [String],
    pub no_significant_risks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'a str>,
}

/// High-traffic references are resolved against the catalog; unknown ids are dropped.
pub fn summarize_risk<'a>(risk: &'a RiskAssessment, catalog: &'a EntityCatalog) -> RiskSummary<'a> {
    let understaffed = risk.understaffed_shifts.as_deref().unwrap_or(&[]);
    let refs = risk.high_traffic_risks.as_deref().unwrap_or(&[]);

    let mut high_traffic: Vec<TrafficRisk<'a>> = refs
        .iter()
        .filter_map(|id| catalog.shift(id))
        .map(|shift| TrafficRisk { shift, traffic_millions: shift.expected_traffic / 1_000_000.0 })
        .collect();
    if high_traffic.len() < refs.len() {
        tracing::debug!(dropped = refs.len() - high_traffic.len(), "high-traffic risks reference unknown shifts");
    }
    sort_chronologically(&mut high_traffic, |t| t.shift);

    RiskSummary {
        risk_score: risk.risk_score,
        band: risk_band(risk.risk_score),
        understaffed_shifts: understaffed,
        no_significant_risks: understaffed.is_empty() && refs.is_empty(),
        high_traffic,
        recommendations: risk.recommendations.as_deref().unwrap_or(&[]),
        warning: risk.error.as_deref(),
    }
}
