pub mod dirty;
pub mod tags;

use std::process::ExitCode;

use acmewin_client::{WindowService, connect};
use acmewin_runtime::resolve_endpoint;
use clap::Args;
use log::{debug, error};

pub use dirty::DirtyArgs;
pub use tags::TagsArgs;

use crate::printer::OutputFormat;

/// Common error type for command handlers
pub type CommandResult<T> = anyhow::Result<T>;

#[derive(Debug, Clone, Args)]
pub struct FormatOptions {
    /// Output one JSON object per window instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

impl FormatOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Connect to acme at the endpoint named by the environment.
fn acme() -> Box<dyn WindowService> {
    let endpoint = resolve_endpoint();
    debug!("[acme] using {endpoint:?}");
    connect(&endpoint)
}

/// One-line description of a fatal error, causes included.
fn fatal_message(program: &str, err: &anyhow::Error) -> String {
    format!("{program}: {err:#}")
}

/// Report a fatal error and pick the exit code.
fn fail(program: &str, err: &anyhow::Error) -> ExitCode {
    let msg = fatal_message(program, err);
    error!("[error] {msg}");
    eprintln!("{msg}");
    ExitCode::FAILURE
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
