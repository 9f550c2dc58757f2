// src/optimizer.rs
//
// Client for the external optimizer. Both calls hit the same endpoint;
// `loadOnly` decides whether a schedule is computed.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    config::Settings,
    error::{AppError, AppResult},
    models::{
        AssignmentMapping, Employee, GeneratedSchedule, Metrics, RiskAssessment, ScheduleConfig,
        Shift, WorkforceData,
    },
};

/// Where snapshots come from. The HTTP layer only talks to this trait.
#[async_trait]
pub trait WorkforceSource: Send + Sync {
    /// Entities only, no assignments.
    async fn load_workforce_data(&self, config: &ScheduleConfig) -> AppResult<WorkforceData>;

    /// Entities plus a computed schedule.
    async fn generate_schedule(&self, config: &ScheduleConfig) -> AppResult<GeneratedSchedule>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DemoResponse {
    input_data: InputData,
    #[serde(default)]
    demo_config: Option<serde_json::Value>,
    #[serde(default)]
    schedule: Option<ScheduleBlock>,
}

#[derive(Deserialize)]
struct InputData {
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    shifts: Vec<Shift>,
}

#[derive(Deserialize)]
struct ScheduleBlock {
    #[serde(default)]
    assignments: AssignmentMapping,
    #[serde(default)]
    metrics: Option<Metrics>,
    #[serde(default)]
    total_cost: Option<f64>,
    #[serde(default)]
    coverage_score: Option<f64>,
    #[serde(default)]
    risk_assessment: Option<RiskAssessment>,
}

// ─────────────────────────────────────────────────────────────────────────────
// reqwest implementation
// ─────────────────────────────────────────────────────────────────────────────

pub struct OptimizerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OptimizerClient {
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let http = reqwest::Client::builder().timeout(settings.optimizer_timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!(
                "{}/api/generate-demo-schedule",
                settings.optimizer_url.trim_end_matches('/')
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, config: &ScheduleConfig, load_only: bool) -> AppResult<DemoResponse> {
        tracing::info!(
            endpoint = %self.endpoint,
            employees = config.num_employees,
            days = config.num_days,
            load_only,
            "requesting workforce data"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&config.wire_body(load_only))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream { status: status.as_u16(), body });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))
    }
}

#[async_trait]
impl WorkforceSource for OptimizerClient {
    async fn load_workforce_data(&self, config: &ScheduleConfig) -> AppResult<WorkforceData> {
        let r = self.request(config, true).await?;
        Ok(WorkforceData {
            employees: r.input_data.employees,
            shifts: r.input_data.shifts,
            run_config: r.demo_config,
        })
    }

    async fn generate_schedule(&self, config: &ScheduleConfig) -> AppResult<GeneratedSchedule> {
        let r = self.request(config, false).await?;
        let schedule = r
            .schedule
            .ok_or_else(|| AppError::Decode("response carried no schedule".into()))?;
        Ok(GeneratedSchedule {
            employees: r.input_data.employees,
            shifts: r.input_data.shifts,
            assignments: schedule.assignments,
            metrics: schedule.metrics,
            risk: schedule.risk_assessment,
            total_cost: schedule.total_cost,
            coverage_score: schedule.coverage_score,
            run_config: r.demo_config,
        })
    }
}
