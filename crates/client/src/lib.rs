//! Client side of the acme window service.
//!
//! acme exposes its windows as a small file tree: an `index` listing every
//! open window and one directory per window id holding `ctl`, `tag`, `body`
//! and friends. The tree is reachable either through a mount (Plan 9,
//! 9pfuse) or through plan9port's `9p` command; both are hidden behind
//! [`WindowService`].

mod index;
mod mount;
mod plan9port;

use acmewin_runtime::AcmeEndpoint;
use anyhow::Result;

pub use index::parse_index;
pub use mount::MountedService;
pub use plan9port::Plan9portService;

/// Window identifier assigned by acme.
pub type WindowId = u32;

/// One entry of acme's window index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinInfo {
    pub id: WindowId,
    /// First word of the window tag, usually a file or directory path.
    pub name: String,
}

/// An open window. Dropping the handle releases it.
pub trait Window {
    /// Read the whole content of one of the window's files (e.g. `ctl`).
    fn read_all(&mut self, file: &str) -> Result<Vec<u8>>;
}

pub trait WindowService {
    /// List every open window.
    fn windows(&self) -> Result<Vec<WinInfo>>;

    /// Open a window by id.
    fn open(&self, id: WindowId) -> Result<Box<dyn Window>>;
}

/// Build the service for a resolved endpoint.
pub fn connect(endpoint: &AcmeEndpoint) -> Box<dyn WindowService> {
    match endpoint {
        AcmeEndpoint::Mount(root) => Box::new(MountedService::new(root.clone())),
        AcmeEndpoint::Plan9port { binary } => Box::new(Plan9portService::new(binary.clone())),
    }
}
