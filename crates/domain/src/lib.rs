//! Ghost DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod dns_wire;
pub mod errors;
pub mod hosts_list;
pub mod query_log;

pub use config::{
    ActivityConfig, BlockingConfig, CliOverrides, ClientsConfig, Config, ConfigError,
    DashboardConfig, LoggingConfig, ServerConfig, UpstreamConfig,
};
pub use dns_record::RecordType;
pub use dns_request::{normalize_domain, DnsRequest, TransportProtocol};
pub use dns_wire::{ParsedQuery, ResponseCode};
pub use errors::DomainError;
pub use hosts_list::parse_hosts;
pub use query_log::{ActivityRecord, ActivitySnapshot, QueryStats, QueryStatus};

/// Address handed out for every blocked name.
pub const SINKHOLE_ADDR: std::net::Ipv4Addr = std::net::Ipv4Addr::UNSPECIFIED;

/// TTL of the synthesized sinkhole answer.
pub const SINKHOLE_TTL: u32 = 60;

/// Name recorded for clients whose reverse lookup failed.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";
