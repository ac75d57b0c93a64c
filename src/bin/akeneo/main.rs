//! akeneo: command-line client for the Akeneo PIM REST API

mod args;
mod handlers;
mod io;
mod print;

use std::process::ExitCode;

use akeneo_cli::utils::logger::{build_dispatch, level_from_flags};
use clap::Parser;
use tracing::error;
use tracing::instrument::WithSubscriber;

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = level_from_flags(cli.verbose, cli.quiet);
    let dispatch = match build_dispatch(level, cli.log_file.as_deref()) {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let logs_to_file = cli.log_file.is_some();
    match handlers::run(cli).with_subscriber(dispatch.clone()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::dispatcher::with_default(&dispatch, || error!("{e}"));
            if logs_to_file {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
