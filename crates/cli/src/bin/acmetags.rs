use std::process::ExitCode;

use acmewin_cli::{
    args::go_style_args,
    commands::tags::{self, TagsArgs},
};
use acmewin_runtime::logging;
use clap::Parser;

fn main() -> ExitCode {
    logging::init().ok();

    let args = TagsArgs::parse_from(go_style_args(std::env::args_os(), &tags::FLAGS));
    tags::run(args)
}
