// src/views/catalog.rs

use std::collections::HashMap;

use crate::models::{Employee, Shift};

/// Employees and shifts of one load, addressable by id.
///
/// Ids are expected to be unique; if a load repeats one, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    employee_pos: HashMap<String, usize>,
    shift_pos: HashMap<String, usize>,
}

impl EntityCatalog {
    pub fn new(employees: Vec<Employee>, shifts: Vec<Shift>) -> Self {
        let employees = dedup_by_id(employees, |e| &e.id, "employee");
        let shifts = dedup_by_id(shifts, |s| &s.id, "shift");

        let employee_pos = employees.iter().enumerate().map(|(i, e)| (e.id.clone(), i)).collect();
        let shift_pos = shifts.iter().enumerate().map(|(i, s)| (s.id.clone(), i)).collect();

        Self { employees, shifts, employee_pos, shift_pos }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employee_pos.get(id).map(|&i| &self.employees[i])
    }

    pub fn shift(&self, id: &str) -> Option<&Shift> {
        self.shift_pos.get(id).map(|&i| &self.shifts[i])
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.shifts.is_empty()
    }
}

fn dedup_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> &String, kind: &str) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    let before = items.len();
    let kept: Vec<T> = items.into_iter().filter(|it| seen.insert(id(it).clone())).collect();
    if kept.len() != before {
        tracing::warn!(kind, dropped = before - kept.len(), "duplicate ids in catalog load");
    }
    kept
}
