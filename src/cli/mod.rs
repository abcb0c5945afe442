//! Command-line interface layer.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, extract::extract, init::init, serve::serve, set::set};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Init) => init(),
        Some(Command::Serve(cmd)) => serve(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Set(cmd)) => set(cmd),
        Some(Command::Check(cmd)) => check(cmd, verbose),
        None => Ok(ExitStatus::Success),
    }
}
