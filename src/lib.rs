// src/lib.rs

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod labels;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod routes;
pub mod snapshot;
pub mod views;

pub use error::{AppError, AppResult};

use optimizer::WorkforceSource;
use snapshot::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub snapshots: Arc<SnapshotStore>,
    pub source: Arc<dyn WorkforceSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn WorkforceSource>) -> Self {
        Self { snapshots: Arc::new(SnapshotStore::new()), source }
    }
}
