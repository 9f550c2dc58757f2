// src/snapshot.rs
//
// The one piece of shared state: the snapshot currently on display.
// It is replaced whole, never patched, and at most one fetch may be
// in flight at a time.

use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{GeneratedSchedule, Metrics, RiskAssessment, WorkforceData},
    views::{AssignmentIndex, EntityCatalog},
};

#[derive(Debug)]
pub struct Snapshot {
    pub id: Uuid,
    pub loaded_at: DateTime<Utc>,
    /// Fingerprint of the request config this snapshot was fetched with.
    pub config_fingerprint: Option<String>,
    pub catalog: EntityCatalog,
    pub index: AssignmentIndex,
    pub has_schedule: bool,
    pub metrics: Option<Metrics>,
    pub risk: Option<RiskAssessment>,
    pub total_cost: Option<f64>,
    pub coverage_score: Option<f64>,
    pub run_config: Option<serde_json::Value>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            loaded_at: Utc::now(),
            config_fingerprint: None,
            catalog: EntityCatalog::default(),
            index: AssignmentIndex::default(),
            has_schedule: false,
            metrics: None,
            risk: None,
            total_cost: None,
            coverage_score: None,
            run_config: None,
        }
    }

    /// Entities only; any previous schedule, metrics and risk are gone.
    pub fn from_workforce(data: WorkforceData, fingerprint: Option<String>) -> Self {
        let catalog = EntityCatalog::new(data.employees, data.shifts);
        Self {
            config_fingerprint: fingerprint,
            catalog,
            run_config: data.run_config,
            ..Self::empty()
        }
    }

    pub fn from_schedule(data: GeneratedSchedule, fingerprint: Option<String>) -> Self {
        let catalog = EntityCatalog::new(data.employees, data.shifts);
        let index = AssignmentIndex::build(Some(&data.assignments), &catalog);
        Self {
            config_fingerprint: fingerprint,
            catalog,
            index,
            has_schedule: true,
            metrics: data.metrics,
            risk: data.risk,
            total_cost: data.total_cost,
            coverage_score: data.coverage_score,
            run_config: data.run_config,
            ..Self::empty()
        }
    }

    /// Ids present here but absent from `newer`.
    pub fn missing_from(&self, newer: &Snapshot) -> MissingEntities {
        let emp: HashSet<&str> = newer.catalog.employees().iter().map(|e| e.id.as_str()).collect();
        let sh: HashSet<&str> = newer.catalog.shifts().iter().map(|s| s.id.as_str()).collect();
        MissingEntities {
            employees: self
                .catalog
                .employees()
                .iter()
                .filter(|e| !emp.contains(e.id.as_str()))
                .map(|e| e.id.clone())
                .collect(),
            shifts: self
                .catalog
                .shifts()
                .iter()
                .filter(|s| !sh.contains(s.id.as_str()))
                .map(|s| s.id.clone())
                .collect(),
        }
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            id: self.id,
            loaded_at: self.loaded_at,
            employees: self.catalog.employees().len(),
            shifts: self.catalog.shifts().len(),
            scheduled_shifts: self.index.entries().count(),
            has_schedule: self.has_schedule,
            has_metrics: self.metrics.is_some(),
            has_risk: self.risk.is_some(),
            total_cost: self.total_cost,
            coverage_score: self.coverage_score,
            run_config: self.run_config.clone(),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct MissingEntities {
    pub employees: Vec<String>,
    pub shifts: Vec<String>,
}

impl MissingEntities {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.shifts.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct SnapshotSummary {
    pub id: Uuid,
    pub loaded_at: DateTime<Utc>,
    pub employees: usize,
    pub shifts: usize,
    pub scheduled_shifts: usize,
    pub has_schedule: bool,
    pub has_metrics: bool,
    pub has_risk: bool,
    pub total_cost: Option<f64>,
    pub coverage_score: Option<f64>,
    pub run_config: Option<serde_json::Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
    fetch_gate: Mutex<()>,
}

/// Held for the duration of one fetch; dropping it admits the next.
pub type FetchPermit<'a> = MutexGuard<'a, ()>;

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::empty())),
            fetch_gate: Mutex::new(()),
        }
    }

    /// The snapshot on display; derive from it without holding any lock.
    pub async fn current(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Rejects instead of queueing when another fetch is running.
    pub fn begin_fetch(&self) -> AppResult<FetchPermit<'_>> {
        self.fetch_gate.try_lock().map_err(|_| AppError::Busy)
    }

    /// True while a fetch holds the gate.
    pub fn is_fetching(&self) -> bool {
        self.fetch_gate.try_lock().is_err()
    }

    /// Swap in `next` as a whole and hand back the one it replaced.
    pub async fn replace(&self, _permit: &FetchPermit<'_>, next: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(next);
        let previous = std::mem::replace(&mut *self.current.write().await, next.clone());
        tracing::info!(
            snapshot = %next.id,
            employees = next.catalog.employees().len(),
            shifts = next.catalog.shifts().len(),
            scheduled = next.has_schedule,
            "snapshot replaced"
        );
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use crate::views::fixtures::{employee, shift};

    fn workforce() -> WorkforceData {
        WorkforceData {
            employees: vec![employee("eng_1", 50.0, 40.0), employee("eng_2", 50.0, 40.0)],
            shifts: vec![shift("shift_1", "2025-11-03", ShiftType::Day)],
            run_config: None,
        }
    }

    #[tokio::test]
    async fn second_fetch_is_rejected_while_one_is_in_flight() {
        let store = SnapshotStore::new();
        let permit = store.begin_fetch().unwrap();
        assert!(matches!(store.begin_fetch(), Err(AppError::Busy)));
        assert!(store.is_fetching());
        drop(permit);
        assert!(!store.is_fetching());
        assert!(store.begin_fetch().is_ok());
    }

    #[tokio::test]
    async fn replace_swaps_everything_at_once() {
        let store = SnapshotStore::new();
        let before = store.current().await;
        assert!(before.catalog.is_empty());

        let permit = store.begin_fetch().unwrap();
        let previous = store.replace(&permit, Snapshot::from_workforce(workforce(), None)).await;
        assert_eq!(previous.id, before.id);

        let now = store.current().await;
        assert_eq!(now.catalog.employees().len(), 2);
        assert!(!now.has_schedule);
        // readers holding the old Arc still see the old data
        assert!(before.catalog.is_empty());
    }

    #[test]
    fn missing_from_reports_dropped_ids() {
        let loaded = Snapshot::from_workforce(workforce(), None);
        let generated = Snapshot::from_schedule(
            GeneratedSchedule {
                employees: vec![employee("eng_1", 50.0, 40.0)],
                shifts: vec![shift("shift_1", "2025-11-03", ShiftType::Day)],
                ..Default::default()
            },
            None,
        );
        let missing = loaded.missing_from(&generated);
        assert_eq!(missing.employees, ["eng_2"]);
        assert!(missing.shifts.is_empty());
        assert!(generated.missing_from(&generated).is_empty());
    }
}
