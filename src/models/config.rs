// src/models/config.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::Department;
use crate::error::AppError;

pub const MIN_EMPLOYEES: u32 = 1;
pub const MAX_EMPLOYEES: u32 = 50;
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;

/// Parameters for one load or generate request; omitted fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub num_employees: u32,
    pub num_days: u32,
    pub start_date: NaiveDate,
    /// Whole percentages per department; must total 100.
    pub employee_distribution: BTreeMap<Department, u32>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            num_employees: 1,
            num_days: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap_or_default(),
            employee_distribution: BTreeMap::from([
                (Department::AdOperations, 40),
                (Department::Engineering, 30),
                (Department::Support, 30),
            ]),
        }
    }
}

/// Outcome of checking the distribution without issuing a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionCheck {
    pub total_percent: u64,
    pub permitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    num_employees: u32,
    num_days: u32,
    start_date: String,
    employee_distribution: BTreeMap<&'a str, f64>,
    load_only: bool,
}

impl ScheduleConfig {
    /// Summed wide so that no combination of `u32` shares can wrap to 100.
    pub fn distribution_total(&self) -> u64 {
        self.employee_distribution.values().map(|&pct| u64::from(pct)).sum()
    }

    pub fn check_distribution(&self) -> DistributionCheck {
        let total_percent = self.distribution_total();
        let permitted = total_percent == 100;
        DistributionCheck {
            total_percent,
            permitted,
            warning: (!permitted).then(|| format!("Total is {total_percent}%, must total 100%")),
        }
    }

    /// Rejects anything that must never reach the optimizer.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_EMPLOYEES..=MAX_EMPLOYEES).contains(&self.num_employees) {
            return Err(AppError::Validation(format!(
                "Number of employees must be between {MIN_EMPLOYEES} and {MAX_EMPLOYEES}"
            )));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.num_days) {
            return Err(AppError::Validation(format!(
                "Number of days must be between {MIN_DAYS} and {MAX_DAYS}"
            )));
        }
        if let Some((dept, pct)) = self.employee_distribution.iter().find(|&(_, &pct)| pct > 100) {
            return Err(AppError::Validation(format!(
                "Employee distribution: {} is {pct}%, no department may exceed 100%",
                dept.key()
            )));
        }
        let check = self.check_distribution();
        if let Some(warning) = check.warning {
            return Err(AppError::Validation(format!("Employee distribution: {warning}")));
        }
        Ok(())
    }

    /// JSON body for the optimizer; percentages go out as fractions.
    pub fn wire_body(&self, load_only: bool) -> serde_json::Value {
        let req = WireRequest {
            num_employees: self.num_employees,
            num_days: self.num_days,
            start_date: self.start_date.format("%Y-%m-%d").to_string(),
            employee_distribution: self
                .employee_distribution
                .iter()
                .map(|(d, pct)| (d.key(), f64::from(*pct) / 100.0))
                .collect(),
            load_only,
        };
        serde_json::to_value(req).unwrap_or(serde_json::Value::Null)
    }

    /// sha256 over the canonical request body (load flag excluded).
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(&self.wire_body(true)).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        format!("{:x}", hasher.finalize())
    }
}
