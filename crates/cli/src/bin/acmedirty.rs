use std::process::ExitCode;

use acmewin_cli::{
    args::go_style_args,
    commands::dirty::{self, DirtyArgs},
};
use acmewin_runtime::logging;
use clap::Parser;

fn main() -> ExitCode {
    logging::init().ok();

    let args = DirtyArgs::parse_from(go_style_args(std::env::args_os(), &dirty::FLAGS));
    dirty::run(args)
}
