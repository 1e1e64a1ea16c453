use std::process::ExitCode;

use acmewin_client::WindowService;
use acmewin_engine::{ScanOptions, list_ranked};
use clap::Parser;

use super::{CommandResult, FormatOptions, acme, fail};
use crate::{
    args::FlagSpec,
    output::{Destination, emit},
    printer::{LabelStyle, PrinterConfig, render},
};

pub const NAME: &str = "acmedirty";

pub const FLAGS: FlagSpec = FlagSpec {
    long: &["json", "help"],
    short: &["f", "h"],
    takes_value: &[],
};

/// List acme windows as dirty or clean, dirty windows first.
#[derive(Debug, Parser)]
#[command(name = NAME, about = "List acme windows as dirty or clean")]
pub struct DirtyArgs {
    /// Only list windows backed by a file on disk (no directories)
    #[arg(short = 'f')]
    pub file_only: bool,

    #[command(flatten)]
    pub format: FormatOptions,
}

impl DirtyArgs {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            file_only: self.file_only,
        }
    }

    fn printer_config(&self) -> PrinterConfig {
        PrinterConfig {
            format: self.format.format(),
            label: LabelStyle::DirtyClean,
            leading_blank: true,
        }
    }
}

pub fn run(args: DirtyArgs) -> ExitCode {
    match execute(&args) {
        Ok(code) => code,
        Err(e) => fail(NAME, &e),
    }
}

fn execute(args: &DirtyArgs) -> CommandResult<ExitCode> {
    let service = acme();
    let report = report(service.as_ref(), args)?;
    emit(&report, &Destination::Stdout)?;
    Ok(ExitCode::SUCCESS)
}

/// Build the full report in memory.
pub fn report(service: &dyn WindowService, args: &DirtyArgs) -> CommandResult<Vec<u8>> {
    let records = list_ranked(service, args.scan_options())?;
    Ok(render(NAME, &records, &args.printer_config())?)
}

#[cfg(test)]
#[path = "dirty_tests.rs"]
mod tests;
