use ghost_dns_application::services::ActivityRecorder;
use ghost_dns_application::use_cases::GetActivitySnapshotUseCase;
use ghost_dns_domain::{ActivityRecord, QueryStatus};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

fn filled_recorder(count: usize) -> Arc<ActivityRecorder> {
    let recorder = Arc::new(ActivityRecorder::new(50));
    for i in 0..count {
        recorder.commit(ActivityRecord::new(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            "localhost",
            format!("d{i}.example.com"),
            QueryStatus::Allowed,
        ));
    }
    recorder
}

#[test]
fn test_default_limit_applies() {
    let use_case = GetActivitySnapshotUseCase::new(filled_recorder(30), 20);

    let snapshot = use_case.execute(None);

    assert_eq!(snapshot.logs.len(), 20);
    assert_eq!(snapshot.stats.total, 30);
    assert_eq!(snapshot.logs[0].domain.as_ref(), "d29.example.com");
}

#[test]
fn test_explicit_limit_overrides_default() {
    let use_case = GetActivitySnapshotUseCase::new(filled_recorder(30), 20);

    assert_eq!(use_case.execute(Some(5)).logs.len(), 5);
    assert_eq!(use_case.execute(Some(500)).logs.len(), 30);
}

#[test]
fn test_empty_recorder() {
    let use_case = GetActivitySnapshotUseCase::new(filled_recorder(0), 20);

    let snapshot = use_case.execute(None);

    assert!(snapshot.logs.is_empty());
    assert_eq!(snapshot.stats.total, 0);
}
