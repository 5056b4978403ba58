use serde::{Deserialize, Serialize};

pub const DEFAULT_BLOCKLIST_URL: &str =
    "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockingConfig {
    /// Hosts-format lists; `http(s)://` URLs or local file paths.
    pub sources: Vec<String>,

    /// Only lines starting with this prefix contribute a domain.
    pub sinkhole_prefix: String,

    pub custom_blocked: Vec<String>,

    /// Reload period for the sources, 0 disables the refresh job.
    pub refresh_interval_secs: u64,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            sources: vec![DEFAULT_BLOCKLIST_URL.to_string()],
            sinkhole_prefix: "0.0.0.0".to_string(),
            custom_blocked: vec![],
            refresh_interval_secs: 0,
        }
    }
}
