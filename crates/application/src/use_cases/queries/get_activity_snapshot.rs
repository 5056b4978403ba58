use crate::services::ActivityRecorder;
use ghost_dns_domain::ActivitySnapshot;
use std::sync::Arc;

pub struct GetActivitySnapshotUseCase {
    recorder: Arc<ActivityRecorder>,
    default_limit: usize,
}

impl GetActivitySnapshotUseCase {
    pub fn new(recorder: Arc<ActivityRecorder>, default_limit: usize) -> Self {
        Self {
            recorder,
            default_limit,
        }
    }

    /// Counters plus up to `limit` most recent records, newest first.
    pub fn execute(&self, limit: Option<usize>) -> ActivitySnapshot {
        self.recorder.snapshot(limit.unwrap_or(self.default_limit))
    }
}
