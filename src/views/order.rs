// src/views/order.rs

use std::cmp::Ordering;

use crate::models::Shift;

/// Date first, then position of the shift type within the day.
pub fn chronological(a: &Shift, b: &Shift) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.shift_type.rank().cmp(&b.shift_type.rank()))
}

/// Stable in-place sort; equal (date, type) pairs keep their input order.
pub fn sort_chronologically<T, F>(items: &mut [T], shift_of: F)
where
    F: Fn(&T) -> &Shift,
{
    items.sort_by(|a, b| chronological(shift_of(a), shift_of(b)));
}
