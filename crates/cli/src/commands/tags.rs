use std::{path::PathBuf, process::ExitCode};

use acmewin_client::WindowService;
use acmewin_engine::{ScanOptions, list_ranked};
use chrono::Local;
use clap::Parser;
use log::{debug, warn};

use super::{CommandResult, FormatOptions, acme, fail};
use crate::{
    args::FlagSpec,
    output::{Destination, emit, with_timestamp_suffix},
    printer::{LabelStyle, PrinterConfig, render},
};

pub const NAME: &str = "acmetags";

pub const FLAGS: FlagSpec = FlagSpec {
    long: &["ts", "all", "json", "help"],
    short: &["o", "h"],
    takes_value: &["o"],
};

/// Print the acme windows with their dirty flag, dirty windows first.
#[derive(Debug, Parser)]
#[command(name = NAME, about = "Print acme windows and whether they are dirty")]
pub struct TagsArgs {
    /// Output file. Only replaced if there was no error and the output is non-empty
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Add a timestamp suffix to the output file name
    #[arg(long = "ts")]
    pub timestamp: bool,

    /// Print the tags of all windows instead of only "win" windows.
    /// Every window is listed already, so this currently changes nothing.
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub format: FormatOptions,
}

impl TagsArgs {
    fn printer_config(&self) -> PrinterConfig {
        PrinterConfig {
            format: self.format.format(),
            label: LabelStyle::Bool,
            leading_blank: false,
        }
    }

    pub fn destination(&self) -> Destination {
        match &self.output {
            None => {
                if self.timestamp {
                    warn!("[{NAME}] -ts has no effect without -o");
                }
                Destination::Stdout
            }
            Some(path) if self.timestamp => {
                Destination::File(with_timestamp_suffix(path, &Local::now()))
            }
            Some(path) => Destination::File(path.clone()),
        }
    }
}

pub fn run(args: TagsArgs) -> ExitCode {
    match execute(&args) {
        Ok(code) => code,
        Err(e) => fail(NAME, &e),
    }
}

fn execute(args: &TagsArgs) -> CommandResult<ExitCode> {
    let service = acme();
    let report = report(service.as_ref(), args)?;
    emit(&report, &args.destination())?;
    Ok(ExitCode::SUCCESS)
}

/// Build the full report in memory.
pub fn report(service: &dyn WindowService, args: &TagsArgs) -> CommandResult<Vec<u8>> {
    if args.all {
        debug!("[{NAME}] -all given; every window is listed regardless");
    }

    let records = list_ranked(service, ScanOptions::default())?;
    Ok(render(NAME, &records, &args.printer_config())?)
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
