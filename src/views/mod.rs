// src/views/mod.rs
//
// Pure derivations over one snapshot. Nothing in here holds state,
// performs I/O, or fails: unknown references are filtered out.

pub mod analytics;
pub mod catalog;
pub mod index;
pub mod order;
pub mod rota;
pub mod schedule;
pub mod weeks;

pub use analytics::{summarize_metrics, summarize_risk, AnalyticsSummary, RiskBand, RiskSummary};
pub use catalog::EntityCatalog;
pub use index::AssignmentIndex;
pub use order::{chronological, sort_chronologically};
pub use rota::{personal_rota, OvertimeNotice, PersonalRota, RotaEntry};
pub use schedule::{filtered_schedule_view, schedule_view, ScheduleFilter, ScheduledShift};
pub use weeks::{bucket_by_week, week_start, WeekBucket};

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::models::{Department, Employee, Priority, Shift, ShiftType, SkillLevel};

    pub fn employee(id: &str, cost_per_hour: f64, max_hours_per_week: f64) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            department: Department::AdOperations,
            skill_level: SkillLevel::Mid,
            cost_per_hour,
            max_hours_per_week,
            skills: ["analytics".to_string()].into(),
            certifications: Default::default(),
            preferred_shift: None,
            on_call_capacity: None,
            timezone: None,
            is_remote: None,
            supported_regions: Default::default(),
        }
    }

    pub fn shift(id: &str, date: &str, shift_type: ShiftType) -> Shift {
        Shift {
            id: id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            shift_type,
            department: Department::AdOperations,
            min_employees: 1,
            max_employees: 2,
            required_skill_level: SkillLevel::Mid,
            required_skills: Default::default(),
            priority: Priority(2),
            is_weekend: false,
            expected_traffic: 0.0,
            region: None,
        }
    }
}
