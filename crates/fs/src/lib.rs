mod record;
mod stat;

pub use record::DiskInfo;
pub use stat::stat_path;
