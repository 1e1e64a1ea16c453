use std::io;

use acmewin_client::WindowId;
use thiserror::Error;

/// Conditions that abort a scan. None of them is retried.
///
/// Messages already carry the underlying cause, so it is not exposed again
/// through `source()`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not get acme windows: {cause:#}")]
    Enumeration { cause: anyhow::Error },

    #[error("could not open window ({name}, {id}): {cause:#}")]
    HandleOpen {
        name: String,
        id: WindowId,
        cause: anyhow::Error,
    },

    #[error("could not read ctl file of ({name}, {id}): {cause:#}")]
    Read {
        name: String,
        id: WindowId,
        cause: anyhow::Error,
    },

    #[error("unexpected number of fields for ({name}, {id}): wanted {wanted}, got {got}")]
    MalformedControl {
        name: String,
        id: WindowId,
        wanted: usize,
        got: usize,
    },

    #[error("could not stat disk file of ({name}, {id}): {cause}")]
    Stat {
        name: String,
        id: WindowId,
        cause: io::Error,
    },
}
