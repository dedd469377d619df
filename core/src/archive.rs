//! # Archive Helpers
//!
//! Bundles product files with the system `tar` binary and compresses with
//! `gzip`, both driven through [`crate::command`]. The heavy lifting stays in
//! the external tools; this module only assembles argument lists and wraps
//! failures.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use hopper_common::error::{Error, Result};
use tracing::debug;

use crate::command;

/// Creates `<stem>.tar`, or `<stem>.tar.gz` when `gzip` is set, containing
/// `files`.
///
/// `stem` is used verbatim; the extension is appended here. Returns the
/// resulting archive path.
pub fn tar_files<P: AsRef<Path>>(stem: &Path, files: &[P], gzip: bool) -> Result<PathBuf> {
    let (flags, extension) = if gzip {
        ("-czf", ".tar.gz")
    } else {
        ("-cf", ".tar")
    };

    let mut target = OsString::from(stem.as_os_str());
    target.push(extension);
    let target = PathBuf::from(target);

    let mut args: Vec<OsString> = vec![OsString::from(flags), target.clone().into_os_string()];
    args.extend(files.iter().map(|file| file.as_ref().into()));

    command::run("tar", &args).map_err(|source| Error::Archive { source })?;
    debug!("created archive [{}]", target.display());
    Ok(target)
}

/// Compresses each of `files` in place, overwriting any compressed sibling
/// left behind by an earlier attempt.
pub fn gzip_files<P: AsRef<Path>>(files: &[P]) -> Result<()> {
    let mut args: Vec<OsString> = vec![OsString::from("--force")];
    args.extend(files.iter().map(|file| file.as_ref().into()));

    command::run("gzip", &args).map_err(|source| Error::Compression { source })?;
    debug!("compressed {} file(s)", files.len());
    Ok(())
}
