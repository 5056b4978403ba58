use ghost_dns_domain::{ActivityRecord, ActivitySnapshot, QueryStats};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct StatsQuery {
    /// Number of recent records to return; the server default applies when absent.
    pub limit: Option<usize>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub blocked: u64,
    pub allowed: u64,
    pub total: u64,
}

impl From<QueryStats> for StatsSummary {
    fn from(stats: QueryStats) -> Self {
        Self {
            blocked: stats.blocked,
            allowed: stats.allowed,
            total: stats.total,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ActivityEntryDto {
    /// Local wall-clock time, `HH:MM:SS`.
    pub time: String,
    pub client_ip: String,
    pub client_name: String,
    pub domain: String,
    pub status: &'static str,
}

impl From<&ActivityRecord> for ActivityEntryDto {
    fn from(record: &ActivityRecord) -> Self {
        Self {
            time: record.timestamp.format("%H:%M:%S").to_string(),
            client_ip: record.client_ip.to_string(),
            client_name: record.client_name.to_string(),
            domain: record.domain.to_string(),
            status: record.status.as_str(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct StatsResponse {
    pub stats: StatsSummary,
    pub logs: Vec<ActivityEntryDto>,
}

impl From<ActivitySnapshot> for StatsResponse {
    fn from(snapshot: ActivitySnapshot) -> Self {
        Self {
            stats: snapshot.stats.into(),
            logs: snapshot.logs.iter().map(ActivityEntryDto::from).collect(),
        }
    }
}
