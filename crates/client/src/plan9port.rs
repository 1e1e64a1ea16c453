use std::{path::PathBuf, process::Command};

use acmewin_runtime::ACME_SERVICE;
use anyhow::{Context, Result, bail};
use log::debug;

use crate::{WinInfo, Window, WindowId, WindowService, index::parse_index};

/// Client for acme via plan9port's `9p` command.
#[derive(Debug, Clone)]
pub struct Plan9portService {
    /// Path to the `9p` binary
    binary: PathBuf,
}

impl Plan9portService {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    fn acme_path(file: &str) -> String {
        format!("{ACME_SERVICE}/{file}")
    }

    /// Run `9p <verb> acme/<file>` and return its stdout.
    fn run(&self, verb: &str, file: &str) -> Result<Vec<u8>> {
        let target = Self::acme_path(file);
        let output = Command::new(&self.binary)
            .args([verb, target.as_str()])
            .output()
            .with_context(|| {
                format!(
                    "failed to execute {} {verb} {target}",
                    self.binary.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("9p {verb} {target} failed: {}", stderr.trim());
        }

        Ok(output.stdout)
    }
}

impl WindowService for Plan9portService {
    fn windows(&self) -> Result<Vec<WinInfo>> {
        let data = self.run("read", "index")?;
        Ok(parse_index(&data))
    }

    fn open(&self, id: WindowId) -> Result<Box<dyn Window>> {
        // Listing the window directory proves the window still exists.
        self.run("ls", &id.to_string())?;

        debug!("[9p] opened window {id}");
        Ok(Box::new(Plan9portWindow {
            id,
            service: self.clone(),
        }))
    }
}

struct Plan9portWindow {
    id: WindowId,
    service: Plan9portService,
}

impl Window for Plan9portWindow {
    fn read_all(&mut self, file: &str) -> Result<Vec<u8>> {
        self.service.run("read", &format!("{}/{file}", self.id))
    }
}

impl Drop for Plan9portWindow {
    fn drop(&mut self) {
        debug!("[9p] closing window {}", self.id);
    }
}

#[cfg(test)]
#[path = "plan9port_tests.rs"]
mod tests;
