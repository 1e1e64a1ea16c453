use std::{
    fs,
    io::{ErrorKind, Result},
    path::Path,
};

use log::trace;

use crate::record::DiskInfo;

/// Stat a window name as a path.
///
/// `Ok(None)` means nothing exists at that path, which is the normal case
/// for scratch windows such as `+Errors`. Every other failure is returned
/// to the caller.
pub fn stat_path(name: impl AsRef<Path>) -> Result<Option<DiskInfo>> {
    let path = name.as_ref();

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!("[stat] {} not found", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    Ok(Some(DiskInfo {
        mod_time: metadata.modified()?,
        is_dir: metadata.is_dir(),
    }))
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
