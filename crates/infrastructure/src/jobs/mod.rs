pub mod blocklist_refresh_job;

pub use blocklist_refresh_job::BlocklistRefreshJob;
