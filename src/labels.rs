// src/labels.rs
//
// Display lookups. Only the HTTP layer reads these; the views never do.

use crate::models::{Department, Priority, ShiftType, SkillLevel};

pub const FALLBACK_COLOR: &str = "#6B7280";

pub fn department_label(d: Department) -> &'static str {
    match d {
        Department::AdOperations => "Ad Operations",
        Department::Engineering => "Engineering",
        Department::Sales => "Sales",
        Department::AccountManagement => "Account Management",
        Department::Support => "Support",
    }
}

pub fn department_color(d: Department) -> &'static str {
    match d {
        Department::AdOperations => "#3B82F6",
        Department::Engineering => "#8B5CF6",
        Department::Sales => "#10B981",
        Department::AccountManagement => "#F59E0B",
        Department::Support => "#EF4444",
    }
}

/// Same as [`department_color`] for keys coming from opaque metrics maps.
pub fn department_color_for_key(key: &str) -> &'static str {
    Department::from_key(key).map_or(FALLBACK_COLOR, department_color)
}

pub fn department_label_for_key(key: &str) -> String {
    Department::from_key(key).map_or_else(|| key.to_string(), |d| department_label(d).to_string())
}

pub fn shift_type_label(t: ShiftType) -> &'static str {
    match t {
        ShiftType::Morning => "Morning Shift (6AM-2PM)",
        ShiftType::Swing => "Afternoon Shift (2PM-10PM)",
        ShiftType::Night => "Night Shift (10PM-6AM)",
        ShiftType::Day => "Standard Shift (9AM-5PM)",
        ShiftType::OnCall => "On-Call",
        ShiftType::Unknown => "Other",
    }
}

pub fn skill_level_label(l: SkillLevel) -> &'static str {
    match l {
        SkillLevel::Junior => "Junior",
        SkillLevel::Mid => "Mid-Level",
        SkillLevel::Senior => "Senior",
        SkillLevel::Lead => "Lead",
    }
}

pub fn priority_label(p: Priority) -> &'static str {
    match p.0 {
        1 => "Low",
        2 => "Medium",
        3 => "High",
        4 => "Critical",
        5 => "Emergency",
        _ => "Unknown",
    }
}
