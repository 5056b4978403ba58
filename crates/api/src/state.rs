use ghost_dns_application::use_cases::{GetActivitySnapshotUseCase, GetBlocklistSizeUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_activity: Arc<GetActivitySnapshotUseCase>,
    pub get_blocklist_size: Arc<GetBlocklistSizeUseCase>,
}
