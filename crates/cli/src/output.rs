use std::{
    ffi::OsString,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use acmewin_runtime::TIMESTAMP_SUFFIX_FORMAT;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use log::{debug, info};
use tempfile::NamedTempFile;

/// Where a finished report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Append `.<timestamp>` to the final component of `path`.
pub fn with_timestamp_suffix<Tz: TimeZone>(path: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(now.format(TIMESTAMP_SUFFIX_FORMAT).to_string());
    path.with_file_name(name)
}

/// Write the report. Returns whether anything was written.
pub fn emit(report: &[u8], dest: &Destination) -> Result<bool> {
    match dest {
        Destination::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(report)
                .and_then(|_| out.flush())
                .context("failed to write to stdout")?;
            Ok(true)
        }
        Destination::File(path) => replace_file(path, report),
    }
}

/// Replace `path` with `report`.
///
/// An empty report leaves the file alone. Otherwise the content goes to a
/// temporary file next to `path` which is then renamed over it, so a
/// failure never leaves a truncated file behind.
pub fn replace_file(path: &Path, report: &[u8]) -> Result<bool> {
    if report.is_empty() {
        info!("[output] empty report, leaving {} untouched", path.display());
        return Ok(false);
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(report)
        .and_then(|_| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;

    match fs::metadata(path) {
        Ok(meta) => fs::set_permissions(tmp.path(), meta.permissions()),
        Err(_) => set_default_permissions(tmp.path()),
    }
    .with_context(|| format!("failed to set permissions on {}", tmp.path().display()))?;

    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    debug!("[output] wrote {} bytes to {}", report.len(), path.display());
    Ok(true)
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
