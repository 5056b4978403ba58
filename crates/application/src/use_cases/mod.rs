pub mod blocklist;
pub mod dns;
pub mod queries;

pub use blocklist::{GetBlocklistSizeUseCase, ReloadBlocklistUseCase};
pub use dns::{HandleDnsQueryUseCase, Resolution};
pub use queries::GetActivitySnapshotUseCase;
