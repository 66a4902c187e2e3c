use std::sync::Arc;
use std::time::{Instant, SystemTime};

use chrono::FixedOffset;

use crate::db::DatabaseProxy;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    db_proxy: Option<Arc<DatabaseProxy>>,
    practice_zone: FixedOffset,
}

impl AppState {
    pub fn new(db_proxy: Option<Arc<DatabaseProxy>>, practice_zone: FixedOffset) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            db_proxy,
            practice_zone,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    /// `None` when the store failed to open at start-up.
    pub fn db_proxy(&self) -> Option<Arc<DatabaseProxy>> {
        self.db_proxy.clone()
    }

    pub fn practice_zone(&self) -> FixedOffset {
        self.practice_zone
    }
}
