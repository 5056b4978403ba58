pub mod health;
pub mod stats;

pub use health::health_check;
pub use stats::get_stats;
