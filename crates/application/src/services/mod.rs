mod activity_recorder;
mod device_name_cache;

pub use activity_recorder::{ActivityLog, ActivityRecorder, DEFAULT_ACTIVITY_CAPACITY};
pub use device_name_cache::DeviceNameCache;
