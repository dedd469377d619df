//! Error types for the pipeline helpers.

use std::io;

use thiserror::Error;

/// Result type alias using the hopper error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the OS helper operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The day-of-year walks past the end of the given year.
    #[error("day of year [{doy}] does not fall within year [{year}]")]
    InvalidDate { year: i32, doy: u32 },

    /// A spawned command did not exit cleanly.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Every configured cache host failed its reachability probe.
    #[error("no reachable cache host among [{candidates}] candidate(s)")]
    NoAvailableHost { candidates: usize },

    /// The `tar` invocation backing an archive request failed.
    #[error("failed to archive files: {source}{}", fmt_missing_output(.source))]
    Archive { source: CommandError },

    /// The `gzip` invocation backing a compression request failed.
    #[error("failed to compress files: {source}{}", fmt_missing_output(.source))]
    Compression { source: CommandError },

    /// Passthrough for filesystem operations that are not the tolerated
    /// "already exists correctly" cases.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Failure classification for a spawned command.
///
/// Each variant carries the rendered command line; captured stdout/stderr is
/// appended to the message when the child produced any.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The child process could not be started at all.
    #[error("failed to execute [{command}]: {source}")]
    Spawn {
        command: String,
        source: io::Error,
    },

    /// The child was terminated by a signal.
    #[error("command [{command}] terminated by signal [{signal}]{}", fmt_output(.output))]
    Signalled {
        command: String,
        signal: i32,
        output: String,
    },

    /// The child exited on its own with a non-zero code.
    #[error("command [{command}] returned error code [{code}]{}", fmt_output(.output))]
    ExitCode {
        command: String,
        code: i32,
        output: String,
    },
}

fn fmt_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(", stdout/stderr is: {output}")
    }
}

/// Archive and compression wrappers mark the absence of captured output
/// explicitly; the command message itself already carries any that exists.
fn fmt_missing_output(source: &CommandError) -> &'static str {
    match source {
        CommandError::Signalled { output, .. } | CommandError::ExitCode { output, .. }
            if output.is_empty() =>
        {
            " (no stdout/stderr captured)"
        }
        _ => "",
    }
}
