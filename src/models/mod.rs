// src/models/mod.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod config;

pub use config::ScheduleConfig;

// ───────────────────────────────────────
// Enumerations
// ───────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    AdOperations,
    Engineering,
    Sales,
    AccountManagement,
    Support,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::AdOperations,
        Department::Engineering,
        Department::Sales,
        Department::AccountManagement,
        Department::Support,
    ];

    /// Wire key, as used in metrics maps and the request distribution.
    pub fn key(self) -> &'static str {
        match self {
            Department::AdOperations => "ad_operations",
            Department::Engineering => "engineering",
            Department::Sales => "sales",
            Department::AccountManagement => "account_management",
            Department::Support => "support",
        }
    }

    pub fn from_key(key: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|d| d.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Morning, // 6AM-2PM
    Day,     // 9AM-5PM
    Swing,   // 2PM-10PM
    Night,   // 10PM-6AM
    OnCall,
    /// Anything the optimizer sends that we do not recognise.
    #[serde(other)]
    Unknown,
}

impl ShiftType {
    /// Nominal hours credited for one shift of this type.
    pub fn hours(self) -> u32 {
        match self {
            ShiftType::OnCall => 4,
            _ => 8,
        }
    }

    /// Position within a day; unknown types sort after everything else.
    pub fn rank(self) -> u8 {
        match self {
            ShiftType::Morning => 1,
            ShiftType::Day => 2,
            ShiftType::Swing => 3,
            ShiftType::Night => 4,
            ShiftType::OnCall => 5,
            ShiftType::Unknown => 6,
        }
    }
}

/// Shift priority, 1 (Low) through 5 (Emergency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u8);

impl Default for Priority {
    fn default() -> Self {
        Priority(1)
    }
}

// ───────────────────────────────────────
// Entities
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: Department,
    pub skill_level: SkillLevel,
    pub cost_per_hour: f64,
    pub max_hours_per_week: f64,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub certifications: BTreeSet<String>,
    #[serde(default)]
    pub preferred_shift: Option<ShiftType>,
    #[serde(default)]
    pub on_call_capacity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub supported_regions: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub department: Department,
    pub min_employees: u32,
    pub max_employees: u32,
    pub required_skill_level: SkillLevel,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_weekend: bool,
    #[serde(default)]
    pub expected_traffic: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Shift {
    pub fn hours(&self) -> u32 {
        self.shift_type.hours()
    }
}

/// shift id → assigned employee ids, exactly as the optimizer returns it.
pub type AssignmentMapping = HashMap<String, Vec<String>>;

// ───────────────────────────────────────
// Optimizer payloads (opaque, read-only)
// ───────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub coverage_rate: Option<f64>,
    #[serde(default)]
    pub total_labor_cost: Option<f64>,
    #[serde(default)]
    pub total_shifts_scheduled: Option<u64>,
    #[serde(default)]
    pub total_employees: Option<u64>,
    #[serde(default)]
    pub idle_employees_count: Option<u64>,
    #[serde(default)]
    pub department_distribution: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub skill_utilization: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderstaffedShiftRisk {
    pub shift_id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub required: u32,
    #[serde(default)]
    pub assigned: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub understaffed_shifts: Option<Vec<UnderstaffedShiftRisk>>,
    #[serde(default)]
    pub high_traffic_risks: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ───────────────────────────────────────
// Transport results
// ───────────────────────────────────────
/// Entities only, as returned by a load-only request.
#[derive(Debug, Clone, Default)]
pub struct WorkforceData {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
    pub run_config: Option<serde_json::Value>,
}

/// Entities plus a computed schedule.
#[derive(Debug, Clone, Default)]
pub struct GeneratedSchedule {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
    pub assignments: AssignmentMapping,
    pub metrics: Option<Metrics>,
    pub risk: Option<RiskAssessment>,
    pub total_cost: Option<f64>,
    pub coverage_score: Option<f64>,
    pub run_config: Option<serde_json::Value>,
}
