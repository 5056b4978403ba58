//! Ghost DNS Infrastructure Layer
pub mod blocklist;
pub mod dns;
pub mod jobs;
pub mod system;
