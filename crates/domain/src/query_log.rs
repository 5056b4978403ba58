use chrono::{DateTime, Local};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryStatus {
    Blocked,
    Allowed,
    Error,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blocked => "BLOCKED",
            Self::Allowed => "ALLOWED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved query as shown in the live activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub timestamp: DateTime<Local>,
    pub client_ip: IpAddr,
    pub client_name: Arc<str>,
    pub domain: Arc<str>,
    pub status: QueryStatus,
}

impl ActivityRecord {
    pub fn new(
        client_ip: IpAddr,
        client_name: impl Into<Arc<str>>,
        domain: impl Into<Arc<str>>,
        status: QueryStatus,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            client_ip,
            client_name: client_name.into(),
            domain: domain.into(),
            status,
        }
    }
}

/// Running counters. An `Error` outcome counts toward `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    pub total: u64,
    pub blocked: u64,
    pub allowed: u64,
}

impl QueryStats {
    pub fn record(&mut self, status: QueryStatus) {
        self.total += 1;
        match status {
            QueryStatus::Blocked => self.blocked += 1,
            QueryStatus::Allowed => self.allowed += 1,
            QueryStatus::Error => {}
        }
    }

    pub fn errors(&self) -> u64 {
        self.total - self.blocked - self.allowed
    }
}

/// Counters and the most recent records, read together.
#[derive(Debug, Clone, Default)]
pub struct ActivitySnapshot {
    pub stats: QueryStats,
    pub logs: Vec<ActivityRecord>,
}
