pub mod health;
pub mod stats;

pub use health::HealthResponse;
pub use stats::{ActivityEntryDto, StatsQuery, StatsResponse, StatsSummary};
