use std::time::SystemTime;

/// What the filesystem says about a window name that exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskInfo {
    /// Last modification time
    pub mod_time: SystemTime,
    pub is_dir: bool,
}
