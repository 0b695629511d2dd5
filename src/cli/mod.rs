//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::deepl::DeeplError;

/// Maps a fatal error to the process exit code.
///
/// DeepL being unreachable or refusing a request is `UNAVAILABLE`; anything
/// else is a `SOFTWARE` failure.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<DeeplError>() {
        Some(DeeplError::RemoteService { .. } | DeeplError::Transport(_)) => {
            exitcode::UNAVAILABLE
        }
        _ => exitcode::SOFTWARE,
    }
}
