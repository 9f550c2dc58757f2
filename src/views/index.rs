// src/views/index.rs

use std::collections::{HashMap, HashSet};

use super::catalog::EntityCatalog;
use crate::models::AssignmentMapping;

/// Both directions of the assignment mapping, built once per snapshot.
#[derive(Debug, Clone, Default)]
pub struct AssignmentIndex {
    by_shift: HashMap<String, Vec<String>>,
    by_employee: HashMap<String, Vec<String>>,
}

impl AssignmentIndex {
    /// `mapping` may be absent (entities loaded, nothing scheduled yet).
    pub fn build(mapping: Option<&AssignmentMapping>, catalog: &EntityCatalog) -> Self {
        let Some(mapping) = mapping else {
            return Self::default();
        };

        let mut by_employee: HashMap<String, Vec<String>> = HashMap::new();
        let mut unresolved_shifts = 0usize;
        let mut unresolved_employees = 0usize;
        for (shift_id, employee_ids) in mapping {
            if catalog.shift(shift_id).is_none() {
                unresolved_shifts += 1;
                continue;
            }
            let mut seen = HashSet::new();
            for emp in employee_ids.iter().filter(|e| seen.insert(e.as_str())) {
                if catalog.employee(emp).is_none() {
                    unresolved_employees += 1;
                    continue;
                }
                by_employee.entry(emp.clone()).or_default().push(shift_id.clone());
            }
        }
        if unresolved_shifts > 0 || unresolved_employees > 0 {
            tracing::debug!(
                unresolved_shifts,
                unresolved_employees,
                "assignment entries reference unknown entities"
            );
        }

        Self { by_shift: mapping.clone(), by_employee }
    }

    /// Resolvable shifts the employee is assigned to, in no particular order.
    /// Empty for employees not in the catalog.
    pub fn shifts_for(&self, employee_id: &str) -> &[String] {
        self.by_employee.get(employee_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The raw mapping value; ids are not checked against the catalog.
    pub fn employees_for(&self, shift_id: &str) -> &[String] {
        self.by_shift.get(shift_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every mapping entry, including ones whose shift is unknown.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.by_shift.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.by_shift.is_empty()
    }
}
