// src/views/rota.rs

use serde::Serialize;

use super::{
    catalog::EntityCatalog,
    index::AssignmentIndex,
    order::sort_chronologically,
    weeks::{bucket_by_week, WeekBucket},
};
use crate::models::{Employee, Shift};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotaEntry<'a> {
    pub shift: &'a Shift,
    pub hours: u32,
}

/// Scheduled hours above the employee's weekly maximum. Advisory only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeNotice {
    pub scheduled_hours: u32,
    pub max_hours_per_week: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalRota<'a> {
    pub employee: &'a Employee,
    pub weeks: Vec<WeekBucket<RotaEntry<'a>>>,
    pub total_shifts: usize,
    pub total_hours: u32,
    pub total_cost: f64,
    pub overtime: Option<OvertimeNotice>,
}

impl<'a> PersonalRota<'a> {
    pub fn is_overtime(&self) -> bool {
        self.overtime.is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RotaEntry<'a>> + '_ {
        self.weeks.iter().flat_map(|w| w.items.iter())
    }
}

/// One employee's schedule: ordered, grouped by week, with totals.
///
/// Cost is the aggregate hours at the employee's flat hourly rate, so on-call
/// hours cost the same per hour as standard ones.
pub fn personal_rota<'a>(
    employee: &'a Employee,
    catalog: &'a EntityCatalog,
    index: &AssignmentIndex,
) -> PersonalRota<'a> {
    let mut entries: Vec<RotaEntry<'a>> = index
        .shifts_for(&employee.id)
        .iter()
        .filter_map(|id| catalog.shift(id))
        .map(|shift| RotaEntry { shift, hours: shift.hours() })
        .collect();
    sort_chronologically(&mut entries, |e| e.shift);

    let total_shifts = entries.len();
    let total_hours: u32 = entries.iter().map(|e| e.hours).sum();
    let total_cost = f64::from(total_hours) * employee.cost_per_hour;

    let overtime = (f64::from(total_hours) > employee.max_hours_per_week).then(|| OvertimeNotice {
        scheduled_hours: total_hours,
        max_hours_per_week: employee.max_hours_per_week,
    });
    if overtime.is_some() {
        tracing::debug!(employee = %employee.id, total_hours, "employee scheduled over weekly maximum");
    }

    PersonalRota {
        employee,
        weeks: bucket_by_week(entries, |e| e.shift.date),
        total_shifts,
        total_hours,
        total_cost,
        overtime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentMapping, ShiftType};
    use crate::views::fixtures::{employee, shift};

    fn setup(
        shifts: Vec<Shift>,
        assigned: &[&str],
        extra: &[(&str, &str)],
    ) -> (Employee, EntityCatalog, AssignmentMapping) {
        let emp = employee("adops_1", 20.0, 40.0);
        let catalog = EntityCatalog::new(vec![emp.clone()], shifts);
        let mut mapping: AssignmentMapping = assigned
            .iter()
            .map(|id| (id.to_string(), vec!["adops_1".to_string()]))
            .collect();
        for (shift_id, emp_id) in extra {
            mapping.insert(shift_id.to_string(), vec![emp_id.to_string()]);
        }
        (emp, catalog, mapping)
    }

    fn weekdays(n: usize) -> Vec<Shift> {
        // Mon 2025-11-03 onwards
        (0..n)
            .map(|i| shift(&format!("shift_{}", i + 1), &format!("2025-11-{:02}", 3 + i), ShiftType::Day))
            .collect()
    }

    #[test]
    fn five_standard_shifts_hit_the_limit_without_overtime() {
        let (emp, catalog, mapping) =
            setup(weekdays(5), &["shift_1", "shift_2", "shift_3", "shift_4", "shift_5"], &[]);
        let index = AssignmentIndex::build(Some(&mapping), &catalog);
        let rota = personal_rota(&emp, &catalog, &index);
        assert_eq!(rota.total_hours, 40);
        assert_eq!(rota.total_cost, 800.0);
        assert!(!rota.is_overtime());
        assert_eq!(rota.weeks.len(), 1);
    }

    #[test]
    fn six_standard_shifts_flag_overtime() {
        let ids = ["shift_1", "shift_2", "shift_3", "shift_4", "shift_5", "shift_6"];
        let (emp, catalog, mapping) = setup(weekdays(6), &ids, &[]);
        let index = AssignmentIndex::build(Some(&mapping), &catalog);
        let rota = personal_rota(&emp, &catalog, &index);
        assert_eq!(rota.total_hours, 48);
        assert_eq!(rota.total_cost, 960.0);
        assert_eq!(
            rota.overtime,
            Some(OvertimeNotice { scheduled_hours: 48, max_hours_per_week: 40.0 })
        );
    }

    #[test]
    fn on_call_counts_four_hours_at_the_flat_rate() {
        let shifts = vec![
            shift("day", "2025-11-03", ShiftType::Day),
            shift("oncall", "2025-11-03", ShiftType::OnCall),
        ];
        let (emp, catalog, mapping) = setup(shifts, &["oncall", "day"], &[]);
        let index = AssignmentIndex::build(Some(&mapping), &catalog);
        let rota = personal_rota(&emp, &catalog, &index);
        assert_eq!(rota.total_hours, 12);
        assert_eq!(rota.total_cost, 240.0);
        let order: Vec<_> = rota.entries().map(|e| e.shift.id.as_str()).collect();
        assert_eq!(order, ["day", "oncall"]);
    }

    #[test]
    fn no_assignments_means_empty_rota() {
        let (emp, catalog, mapping) = setup(weekdays(2), &[], &[("shift_1", "someone_else")]);
        let index = AssignmentIndex::build(Some(&mapping), &catalog);
        let rota = personal_rota(&emp, &catalog, &index);
        assert!(rota.weeks.is_empty());
        assert_eq!(rota.total_shifts, 0);
        assert_eq!(rota.total_hours, 0);
        assert_eq!(rota.total_cost, 0.0);
        assert!(rota.overtime.is_none());
    }

    #[test]
    fn unknown_shift_refs_are_excluded() {
        let (emp, catalog, mapping) = setup(weekdays(1), &["shift_1", "S-999"], &[]);
        let index = AssignmentIndex::build(Some(&mapping), &catalog);
        let rota = personal_rota(&emp, &catalog, &index);
        assert_eq!(rota.total_shifts, 1);
        assert_eq!(rota.total_hours, 8);
    }

    #[test]
    fn shifts_across_weeks_are_ordered_and_bucketed() {
        let shifts = vec![
            shift("late", "2025-11-10", ShiftType::Night),
            shift("sat", "2025-11-08", ShiftType::Morning),
            shift("sun", "2025-11-09", ShiftType::Swing),
        ];
        let (emp, catalog, mapping) = setup(shifts, &["late", "sat", "sun"], &[]);
        let index = AssignmentIndex::build(Some(&mapping), &catalog);
        let rota = personal_rota(&emp, &catalog, &index);
        let weeks: Vec<_> = rota
            .weeks
            .iter()
            .map(|w| (w.week_start.to_string(), w.items.len()))
            .collect();
        assert_eq!(weeks, [("2025-11-02".to_string(), 1), ("2025-11-09".to_string(), 2)]);
        assert_eq!(rota.weeks[1].items[0].shift.id, "sun");
    }
}
