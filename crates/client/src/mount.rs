use std::{
    fs::{self, File},
    io::{Read, Seek, SeekFrom},
    path::PathBuf,
};

use anyhow::{Context, Result};
use log::debug;

use crate::{WinInfo, Window, WindowId, WindowService, index::parse_index};

/// acme file tree mounted somewhere in the local filesystem.
pub struct MountedService {
    root: PathBuf,
}

impl MountedService {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl WindowService for MountedService {
    fn windows(&self) -> Result<Vec<WinInfo>> {
        let index_path = self.root.join("index");
        let data = fs::read(&index_path)
            .with_context(|| format!("failed to read {}", index_path.display()))?;
        Ok(parse_index(&data))
    }

    fn open(&self, id: WindowId) -> Result<Box<dyn Window>> {
        let dir = self.root.join(id.to_string());
        let ctl_path = dir.join("ctl");
        let ctl = File::open(&ctl_path)
            .with_context(|| format!("failed to open {}", ctl_path.display()))?;

        debug!("[mount] opened window {id}");
        Ok(Box::new(MountedWindow { id, dir, ctl }))
    }
}

/// Holds the window's `ctl` file open for as long as the handle lives.
struct MountedWindow {
    id: WindowId,
    dir: PathBuf,
    ctl: File,
}

impl Window for MountedWindow {
    fn read_all(&mut self, file: &str) -> Result<Vec<u8>> {
        if file == "ctl" {
            let mut buf = Vec::new();
            self.ctl
                .seek(SeekFrom::Start(0))
                .and_then(|_| self.ctl.read_to_end(&mut buf))
                .with_context(|| format!("failed to read ctl of window {}", self.id))?;
            return Ok(buf);
        }

        let path = self.dir.join(file);
        fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
    }
}

impl Drop for MountedWindow {
    fn drop(&mut self) {
        debug!("[mount] closing window {}", self.id);
    }
}

#[cfg(test)]
#[path = "mount_tests.rs"]
mod tests;
