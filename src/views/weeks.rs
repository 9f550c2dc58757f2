// src/views/weeks.rs

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket<T> {
    pub week_start: NaiveDate,
    pub items: Vec<T>,
}

/// Groups an already ordered sequence by week.
///
/// Buckets appear in order of first occurrence; items keep their relative order.
pub fn bucket_by_week<T, I, F>(items: I, date_of: F) -> Vec<WeekBucket<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> NaiveDate,
{
    let mut buckets: Vec<WeekBucket<T>> = Vec::new();
    let mut slot: HashMap<NaiveDate, usize> = HashMap::new();

    for item in items {
        let key = week_start(date_of(&item));
        let pos = *slot.entry(key).or_insert_with(|| {
            buckets.push(WeekBucket { week_start: key, items: Vec::new() });
            buckets.len() - 1
        });
        buckets[pos].items.push(item);
    }
    buckets
}
