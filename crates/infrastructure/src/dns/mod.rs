pub mod forwarding;
pub mod transport;

pub use forwarding::{DnsForwarder, MessageBuilder, ResponseParser};
