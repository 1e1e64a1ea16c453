mod config;
pub mod logging;

pub use config::{
    ACME_MOUNT_ENV, ACME_SERVICE, AcmeEndpoint, DEFAULT_ACME_MOUNT, DEFAULT_NINEP_BIN,
    NINEP_BIN_ENV, PROGRAM_LOG_LEVEL, TIMESTAMP_SUFFIX_FORMAT, ninep_binary,
    resolve_endpoint,
};

pub use logging::init;
