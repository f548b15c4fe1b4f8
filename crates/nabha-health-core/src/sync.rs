//! Health record sync.
//!
//! The app has no sync server yet. [`SimulatedSync`] stands in for one behind
//! the same [`SyncBackend`] trait a network implementation would use: it
//! refuses while offline, otherwise waits for the configured delay and
//! reports success. Records are never modified.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{cached_count, HealthRecord};

/// Default wait before the simulated sync reports success.
pub const DEFAULT_SYNC_DELAY: Duration = Duration::from_millis(2000);

/// Sync errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Device is offline; records will sync when connection is restored")]
    Offline,

    #[error("Sync failed: {0}")]
    Failed(String),
}

impl SyncError {
    /// Locale key of the message shown to the user.
    pub fn message_key(&self) -> &'static str {
        match self {
            SyncError::Offline => "records.syncOffline",
            SyncError::Failed(_) => "records.syncFailed",
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Records handed to the backend
    pub records_synced: usize,
    /// Records also available from the offline cache
    pub cached_offline: usize,
    /// Completion timestamp (RFC 3339)
    pub synced_at: String,
}

impl SyncReport {
    pub fn message_key(&self) -> &'static str {
        "records.syncSuccess"
    }
}

/// A record sync implementation.
pub trait SyncBackend: Send + Sync {
    /// Whether the backend can currently reach its server.
    fn is_online(&self) -> bool;

    /// Record a connectivity change reported by the host.
    fn set_online(&self, online: bool);

    fn sync(&self, records: &[HealthRecord]) -> SyncResult<SyncReport>;
}

/// Stub backend: delay-then-succeed, no I/O.
#[derive(Debug)]
pub struct SimulatedSync {
    delay: Duration,
    online: AtomicBool,
}

impl Default for SimulatedSync {
    fn default() -> Self {
        Self::new(DEFAULT_SYNC_DELAY)
    }
}

impl SimulatedSync {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            online: AtomicBool::new(true),
        }
    }

    /// Same backend with the connectivity flag set.
    pub fn with_online(self, online: bool) -> Self {
        self.set_online(online);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl SyncBackend for SimulatedSync {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    fn set_online(&self, online: bool) {
        if self.online.swap(online, Ordering::AcqRel) != online {
            tracing::info!(online, "Connectivity changed");
        }
    }

    fn sync(&self, records: &[HealthRecord]) -> SyncResult<SyncReport> {
        if !self.is_online() {
            tracing::info!("Sync skipped: offline");
            return Err(SyncError::Offline);
        }

        tracing::info!(
            records = records.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Syncing records"
        );
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let report = SyncReport {
            records_synced: records.len(),
            cached_offline: cached_count(records),
            synced_at: chrono::Utc::now().to_rfc3339(),
        };
        tracing::info!(records = report.records_synced, "Records synced");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RecordSource, SampleData};
    use std::time::Instant;

    #[test]
    fn test_offline_sync_fails() {
        let backend = SimulatedSync::new(Duration::ZERO).with_online(false);
        let err = backend.sync(&SampleData.health_records()).unwrap_err();
        assert_eq!(err, SyncError::Offline);
        assert_eq!(err.message_key(), "records.syncOffline");
    }

    #[test]
    fn test_online_sync_reports_counts() {
        let backend = SimulatedSync::new(Duration::ZERO);
        let records = SampleData.health_records();
        let report = backend.sync(&records).unwrap();

        assert_eq!(report.records_synced, 4);
        assert_eq!(report.cached_offline, 3);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.synced_at).is_ok());
        assert_eq!(report.message_key(), "records.syncSuccess");
    }

    #[test]
    fn test_sync_waits_for_delay() {
        let backend = SimulatedSync::new(Duration::from_millis(20));
        let start = Instant::now();
        backend.sync(&[]).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_connectivity_can_change_after_construction() {
        let backend = SimulatedSync::new(Duration::ZERO);
        let records = SampleData.health_records();
        assert!(backend.is_online());

        backend.set_online(false);
        assert!(!backend.is_online());
        assert_eq!(backend.sync(&records), Err(SyncError::Offline));

        backend.set_online(true);
        assert!(backend.is_online());
        assert_eq!(backend.sync(&records).unwrap().records_synced, 4);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedSync::default().delay(), DEFAULT_SYNC_DELAY);
    }
}
