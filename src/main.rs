use std::process::ExitCode;

use clap::Parser;
use i18n_flow::cli::{Arguments, ExitStatus};
use i18n_flow::logging;

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose);

    match i18n_flow::cli::run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
