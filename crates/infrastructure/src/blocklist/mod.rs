pub mod hosts_source;
pub mod in_memory;

pub use hosts_source::HostsListSource;
pub use in_memory::InMemoryBlocklist;
