// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tokio::sync::Notify;
use tower::ServiceExt;

use rota_views::{
    models::{
        AssignmentMapping, Department, Employee, GeneratedSchedule, Metrics, Priority,
        RiskAssessment, ScheduleConfig, Shift, ShiftType, SkillLevel, WorkforceData,
    },
    optimizer::WorkforceSource,
    AppError, AppResult,
};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn employee(id: &str, name: &str, cost_per_hour: f64, max_hours_per_week: f64) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        department: Department::AdOperations,
        skill_level: SkillLevel::Mid,
        cost_per_hour,
        max_hours_per_week,
        skills: ["analytics".to_string(), "reporting".to_string()].into(),
        certifications: Default::default(),
        preferred_shift: Some(ShiftType::Morning),
        on_call_capacity: Some(false),
        timezone: None,
        is_remote: None,
        supported_regions: Default::default(),
    }
}

pub fn shift(id: &str, day: &str, shift_type: ShiftType, min_employees: u32) -> Shift {
    Shift {
        id: id.into(),
        date: date(day),
        shift_type,
        department: Department::AdOperations,
        min_employees,
        max_employees: min_employees.max(4),
        required_skill_level: SkillLevel::Mid,
        required_skills: ["analytics".to_string()].into(),
        priority: Priority(2),
        is_weekend: false,
        expected_traffic: 0.0,
        region: None,
    }
}

/// Six weekday-ish day shifts for `adops_1` (48h), one understaffed
/// shift, and a reference to an unknown shift.
pub fn sample_schedule() -> GeneratedSchedule {
    let employees = vec![
        employee("adops_1", "AdOps_Employee_1", 20.0, 40.0),
        employee("adops_2", "AdOps_Employee_2", 30.0, 40.0),
    ];

    let mut shifts: Vec<Shift> = (0..6)
        .map(|i| shift(&format!("shift_{}", i + 1), &format!("2025-11-{:02}", 3 + i), ShiftType::Day, 1))
        .collect();
    let mut busy = shift("shift_7", "2025-11-03", ShiftType::Morning, 3);
    busy.expected_traffic = 1_500_000.0;
    shifts.push(busy);

    let mut assignments: AssignmentMapping = (1..=6)
        .map(|i| (format!("shift_{i}"), vec!["adops_1".to_string()]))
        .collect();
    assignments.insert("shift_7".into(), vec!["adops_2".into(), "ghost_9".into()]);
    assignments.insert("S-999".into(), vec!["adops_2".into()]);

    let metrics: Metrics = serde_json::from_value(json!({
        "coverage_rate": 85.7,
        "total_labor_cost": 1200.0,
        "total_shifts_scheduled": 8,
        "total_employees": 4,
        "idle_employees_count": 1,
        "department_distribution": {"ad_operations": 6, "engineering": 2},
        "skill_utilization": {"mid": 7, "senior": 1}
    }))
    .unwrap();

    let risk: RiskAssessment = serde_json::from_value(json!({
        "risk_score": 15,
        "understaffed_shifts": [{
            "shift_id": "shift_7", "date": "2025-11-03",
            "department": "ad_operations", "required": 3, "assigned": 2
        }],
        "high_traffic_risks": ["shift_7", "S-999"],
        "recommendations": ["Add one more ad-ops analyst on Monday mornings"]
    }))
    .unwrap();

    GeneratedSchedule {
        employees,
        shifts,
        assignments,
        metrics: Some(metrics),
        risk: Some(risk),
        total_cost: Some(1200.0),
        coverage_score: Some(0.857),
        run_config: Some(json!({"shifts_per_day": 6})),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake optimizer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeSource {
    pub schedule: GeneratedSchedule,
    pub fail_generate: bool,
    pub calls: AtomicUsize,
    /// When set, load waits: signals `.0` on entry, then waits for `.1`.
    pub hold: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl FakeSource {
    pub fn new(schedule: GeneratedSchedule) -> Self {
        Self { schedule, ..Default::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkforceSource for FakeSource {
    async fn load_workforce_data(&self, _config: &ScheduleConfig) -> AppResult<WorkforceData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((started, release)) = &self.hold {
            started.notify_one();
            release.notified().await;
        }
        Ok(WorkforceData {
            employees: self.schedule.employees.clone(),
            shifts: self.schedule.shifts.clone(),
            run_config: self.schedule.run_config.clone(),
        })
    }

    async fn generate_schedule(&self, _config: &ScheduleConfig) -> AppResult<GeneratedSchedule> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_generate {
            return Err(AppError::Upstream {
                status: 500,
                body: "{\"detail\":\"Failed to generate demo schedule: boom\"}".into(),
            });
        }
        Ok(self.schedule.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

pub fn valid_config() -> Value {
    json!({
        "num_employees": 2,
        "num_days": 6,
        "start_date": "2025-11-03",
        "employee_distribution": {"ad_operations": 40, "engineering": 30, "support": 30}
    })
}
