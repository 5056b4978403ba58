mod get_activity_snapshot;

pub use get_activity_snapshot::GetActivitySnapshotUseCase;
