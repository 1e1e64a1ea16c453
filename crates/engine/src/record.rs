use std::time::SystemTime;

use acmewin_client::WindowId;

/// One open acme window, as reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    /// Window name, usually a path
    pub name: String,
    /// Unsaved changes in the window
    pub dirty: bool,
    /// Modification time of the file named by the window. `None` when
    /// nothing exists at that path.
    pub mod_time: Option<SystemTime>,
}
