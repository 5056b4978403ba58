mod activity;
mod blocking;
mod clients;
mod dashboard;
mod errors;
mod logging;
mod root;
mod server;
mod upstream;

pub use activity::ActivityConfig;
pub use blocking::BlockingConfig;
pub use clients::{nameserver_from_resolv_conf, system_nameserver, ClientsConfig};
pub use dashboard::DashboardConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
