use acmewin_client::{WinInfo, WindowService};
use acmewin_fs::{DiskInfo, stat_path};
use log::debug;

use crate::{
    ctl::{CTL_FIELD_COUNT, parse_dirty},
    error::ScanError,
    rank::rank,
    record::WindowRecord,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Keep only windows whose name is an existing regular file (or
    /// anything else on disk that is not a directory).
    pub file_only: bool,
}

/// Enumerate acme's windows and build one record per window, in index
/// order.
pub fn scan(
    service: &dyn WindowService,
    opts: ScanOptions,
) -> Result<Vec<WindowRecord>, ScanError> {
    let windows = service
        .windows()
        .map_err(|cause| ScanError::Enumeration { cause })?;

    debug!("[scan] {} windows listed", windows.len());

    let mut records = Vec::with_capacity(windows.len());
    for win in windows {
        if let Some(record) = inspect_window(service, win, opts)? {
            records.push(record);
        }
    }

    Ok(records)
}

/// [`scan`] followed by [`rank`].
pub fn list_ranked(
    service: &dyn WindowService,
    opts: ScanOptions,
) -> Result<Vec<WindowRecord>, ScanError> {
    let mut records = scan(service, opts)?;
    rank(&mut records);
    Ok(records)
}

fn read_dirty(service: &dyn WindowService, win: &WinInfo) -> Result<bool, ScanError> {
    // The handle lives only for this function and is closed on every path.
    let mut handle = service
        .open(win.id)
        .map_err(|cause| ScanError::HandleOpen {
            name: win.name.clone(),
            id: win.id,
            cause,
        })?;

    let ctl = handle.read_all("ctl").map_err(|cause| ScanError::Read {
        name: win.name.clone(),
        id: win.id,
        cause,
    })?;

    parse_dirty(&ctl).map_err(|e| ScanError::MalformedControl {
        name: win.name.clone(),
        id: win.id,
        wanted: CTL_FIELD_COUNT,
        got: e.got,
    })
}

fn inspect_window(
    service: &dyn WindowService,
    win: WinInfo,
    opts: ScanOptions,
) -> Result<Option<WindowRecord>, ScanError> {
    let dirty = read_dirty(service, &win)?;

    let disk = stat_path(&win.name).map_err(|cause| ScanError::Stat {
        name: win.name.clone(),
        id: win.id,
        cause,
    })?;

    if opts.file_only && !matches!(disk, Some(DiskInfo { is_dir: false, .. })) {
        debug!("[scan] dropping window {} ({}): not a file", win.id, win.name);
        return Ok(None);
    }

    debug!(
        "[scan] window {} ({}) dirty={} on_disk={}",
        win.id,
        win.name,
        dirty,
        disk.is_some()
    );

    Ok(Some(WindowRecord {
        id: win.id,
        name: win.name,
        dirty,
        mod_time: disk.map(|d| d.mod_time),
    }))
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
