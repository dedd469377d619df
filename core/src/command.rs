//! # Command Execution
//!
//! Blocking child-process execution with argv-style arguments.
//!
//! Commands are spawned directly rather than through a shell, so arguments
//! never pass through shell quoting. A run counts as successful only on a
//! clean zero exit; every other outcome maps to a [`CommandError`] variant
//! carrying the captured output.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use hopper_common::error::CommandError;
use tracing::debug;

/// Runs `program` with `args`, blocking until the child exits.
///
/// Returns the combined stdout/stderr text (trailing newline trimmed) on a
/// clean zero exit. The child inherits the caller's environment and working
/// directory.
pub fn run<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<String, CommandError> {
    run_in(None, program, args)
}

/// Same as [`run`], with an explicit working directory for the child.
pub fn run_in<S: AsRef<OsStr>>(
    dir: Option<&Path>,
    program: &str,
    args: &[S],
) -> Result<String, CommandError> {
    let rendered = render(program, args);
    debug!("running [{rendered}]");

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|source| CommandError::Spawn {
        command: rendered.clone(),
        source,
    })?;

    classify(rendered, &output)
}

fn classify(command: String, output: &Output) -> Result<String, CommandError> {
    let text = combined_output(output);
    match output.status.code() {
        Some(0) => Ok(text),
        Some(code) => Err(CommandError::ExitCode {
            command,
            code,
            output: text,
        }),
        None => Err(CommandError::Signalled {
            command,
            signal: termination_signal(output),
            output: text,
        }),
    }
}

/// Stdout first, then stderr. The commands this module drives are short-lived
/// and mostly one-stream, so ordering between the two is not significant.
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&stderr);
    }
    text.truncate(text.trim_end().len());
    text
}

fn render<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.as_ref().to_string_lossy());
    }
    rendered
}

#[cfg(unix)]
fn termination_signal(output: &Output) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    output.status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn termination_signal(_output: &Output) -> i32 {
    0
}
