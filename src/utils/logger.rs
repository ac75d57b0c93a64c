/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Logging setup
//!
//! The library only emits `tracing` events and never installs a global subscriber.
//! Binaries build a [`Dispatch`] here and attach it to the futures they run, e.g.
//! with [`tracing::instrument::WithSubscriber::with_subscriber`].

use crate::error::AppError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Dispatch, Level};

/// Maps the CLI verbosity flags to a level
///
/// Warnings by default, `-v` for info, `-vv` and more for debug. `quiet` wins
/// and keeps errors only.
#[must_use]
pub fn level_from_flags(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Builds a subscriber writing to `log_file`, appending, or to stderr when none is given
pub fn build_dispatch(level: Level, log_file: Option<&Path>) -> Result<Dispatch, AppError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let dispatch = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Dispatch::new(
                builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .finish(),
            )
        }
        None => Dispatch::new(builder.with_writer(std::io::stderr).finish()),
    };
    Ok(dispatch)
}
