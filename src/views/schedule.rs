// src/views/schedule.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{catalog::EntityCatalog, index::AssignmentIndex, order::sort_chronologically};
use crate::models::{Department, Shift};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledShift<'a> {
    pub shift: &'a Shift,
    pub employee_ids: &'a [String],
    pub understaffed: bool,
    /// How many more employees the shift needs; 0 unless understaffed.
    pub shortfall: u32,
}

impl ScheduledShift<'_> {
    pub fn assigned_count(&self) -> usize {
        self.employee_ids.len()
    }
}

/// Narrowing applied after the view is derived.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScheduleFilter {
    pub department: Option<Department>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub understaffed_only: bool,
}

impl ScheduleFilter {
    pub fn matches(&self, row: &ScheduledShift<'_>) -> bool {
        self.department.map_or(true, |d| row.shift.department == d)
            && self.from.map_or(true, |from| row.shift.date >= from)
            && self.to.map_or(true, |to| row.shift.date <= to)
            && (!self.understaffed_only || row.understaffed)
    }
}

/// Every mapping entry whose shift is known, in chronological order.
pub fn schedule_view<'a>(catalog: &'a EntityCatalog, index: &'a AssignmentIndex) -> Vec<ScheduledShift<'a>> {
    let mut rows: Vec<ScheduledShift<'a>> = index
        .entries()
        .filter_map(|(shift_id, employee_ids)| {
            let shift = catalog.shift(shift_id)?;
            let assigned = u32::try_from(employee_ids.len()).unwrap_or(u32::MAX);
            let shortfall = shift.min_employees.saturating_sub(assigned);
            Some(ScheduledShift {
                shift,
                employee_ids: employee_ids.as_slice(),
                understaffed: shortfall > 0,
                shortfall,
            })
        })
        .collect();
    // mapping iteration order is arbitrary; fix it before the stable sort
    rows.sort_by(|a, b| a.shift.id.cmp(&b.shift.id));
    sort_chronologically(&mut rows, |r| r.shift);
    rows
}

pub fn filtered_schedule_view<'a>(
    catalog: &'a EntityCatalog,
    index: &'a AssignmentIndex,
    filter: &ScheduleFilter,
) -> Vec<ScheduledShift<'a>> {
    schedule_view(catalog, index).into_iter().filter(|r| filter.matches(r)).collect()
}
