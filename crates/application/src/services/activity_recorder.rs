use ghost_dns_domain::{ActivityRecord, ActivitySnapshot, QueryStats};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const DEFAULT_ACTIVITY_CAPACITY: usize = 50;

/// Bounded newest-first list of activity records.
#[derive(Debug)]
pub struct ActivityLog {
    records: VecDeque<ActivityRecord>,
    capacity: usize,
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: ActivityRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    pub fn recent(&self, limit: usize) -> Vec<ActivityRecord> {
        self.records.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ACTIVITY_CAPACITY)
    }
}

#[derive(Debug, Default)]
struct ActivityState {
    log: ActivityLog,
    stats: QueryStats,
}

/// Activity log and counters behind a single lock.
///
/// A commit pushes the record and bumps the counters in one critical
/// section, and snapshots are taken under the same lock, so readers never
/// see one without the other. Records appear in commit order.
#[derive(Debug, Default)]
pub struct ActivityRecorder {
    state: Mutex<ActivityState>,
}

impl ActivityRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(ActivityState {
                log: ActivityLog::with_capacity(capacity),
                stats: QueryStats::default(),
            }),
        }
    }

    pub fn commit(&self, record: ActivityRecord) {
        let mut state = self.lock();
        state.stats.record(record.status);
        state.log.push(record);
    }

    pub fn snapshot(&self, limit: usize) -> ActivitySnapshot {
        let state = self.lock();
        ActivitySnapshot {
            stats: state.stats,
            logs: state.log.recent(limit),
        }
    }

    pub fn stats(&self) -> QueryStats {
        self.lock().stats
    }

    pub fn len(&self) -> usize {
        self.lock().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().log.capacity()
    }

    // Nothing under the lock can panic mid-update, so a poisoned state is still whole.
    fn lock(&self) -> MutexGuard<'_, ActivityState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_dns_domain::QueryStatus;
    use std::net::{IpAddr, Ipv4Addr};

    fn record(domain: &str) -> ActivityRecord {
        ActivityRecord::new(
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            "host",
            domain,
            QueryStatus::Allowed,
        )
    }

    #[test]
    fn log_evicts_oldest_when_full() {
        let mut log = ActivityLog::with_capacity(3);
        for d in ["a", "b", "c", "d"] {
            log.push(record(d));
        }
        let domains: Vec<_> = log.recent(10).iter().map(|r| r.domain.to_string()).collect();
        assert_eq!(domains, vec!["d", "c", "b"]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let log = ActivityLog::with_capacity(0);
        assert_eq!(log.capacity(), 1);
    }
}
