use std::path::{Path, PathBuf};

pub const PROGRAM_LOG_LEVEL: &str = "ACMEWIN_LOG_LEVEL";

/// Points at a mounted acme file tree, bypassing plan9port.
pub const ACME_MOUNT_ENV: &str = "ACMEWIN_MOUNT";
/// Overrides the plan9port `9p` binary used to talk to acme.
pub const NINEP_BIN_ENV: &str = "ACMEWIN_9P";

pub const DEFAULT_ACME_MOUNT: &str = "/mnt/acme";
pub const DEFAULT_NINEP_BIN: &str = "9p";

/// Service name acme posts in the plan9port namespace.
pub const ACME_SERVICE: &str = "acme";

/// Format of the suffix `-ts` appends to output file names.
pub const TIMESTAMP_SUFFIX_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Where the acme window service can be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcmeEndpoint {
    /// acme's file tree is mounted at this directory (Plan 9, 9pfuse, v9fs).
    Mount(PathBuf),
    /// Talk to acme through plan9port's `9p` command.
    Plan9port { binary: PathBuf },
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn ninep_binary() -> PathBuf {
    env_path(NINEP_BIN_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_NINEP_BIN))
}

/// Resolve the endpoint from the environment.
///
/// An explicit `ACMEWIN_MOUNT` always wins. Otherwise the conventional
/// Plan 9 mount point is used when it carries an `index` file, and
/// plan9port is the fallback.
pub fn resolve_endpoint() -> AcmeEndpoint {
    resolve_endpoint_with(Path::new(DEFAULT_ACME_MOUNT))
}

pub(crate) fn resolve_endpoint_with(default_mount: &Path) -> AcmeEndpoint {
    if let Some(mount) = env_path(ACME_MOUNT_ENV) {
        return AcmeEndpoint::Mount(mount);
    }

    if default_mount.join("index").is_file() {
        return AcmeEndpoint::Mount(default_mount.to_path_buf());
    }

    AcmeEndpoint::Plan9port {
        binary: ninep_binary(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
