mod blocklist_lookup;
mod blocklist_source;
mod hostname_resolver;
mod reply_sink;
mod upstream_forwarder;

pub use blocklist_lookup::{BlocklistLookup, BlocklistWriter};
pub use blocklist_source::BlocklistSource;
pub use hostname_resolver::HostnameResolver;
pub use reply_sink::ReplySink;
pub use upstream_forwarder::{UpstreamForwarder, UpstreamReply};
