//! Idempotent filesystem setup helpers.
//!
//! Both helpers tolerate exactly one failure: the target already existing in
//! the requested state. Everything else propagates the underlying OS error
//! unchanged.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use hopper_common::error::Result;
use tracing::debug;

/// Permission bits for created directories: owner rwx, group/other rx.
const DIRECTORY_MODE: u32 = 0o755;

/// Creates `directory` and any missing parents with mode 0755.
///
/// Succeeds silently when the path already exists as a directory.
pub fn create_directory(directory: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }
    builder.create(directory)?;
    debug!("directory [{}] is in place", directory.display());
    Ok(())
}

/// Creates a symbolic link at `link_path` pointing to `src_path`.
///
/// Succeeds silently when a link is already there and resolves to
/// `src_path`. A non-link collision, or a link resolving elsewhere, fails
/// with the original "already exists" error.
pub fn create_link(src_path: &Path, link_path: &Path) -> Result<()> {
    match symlink(src_path, link_path) {
        Ok(()) => {
            debug!(
                "linked [{}] -> [{}]",
                link_path.display(),
                src_path.display()
            );
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && points_at(link_path, src_path) => {
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(unix)]
fn symlink(src_path: &Path, link_path: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src_path, link_path)
}

#[cfg(not(unix))]
fn symlink(_src_path: &Path, _link_path: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links require a unix host",
    ))
}

/// True when `link_path` is a symlink whose target, literal or fully
/// resolved, equals `src_path`.
fn points_at(link_path: &Path, src_path: &Path) -> bool {
    match fs::read_link(link_path) {
        Ok(target) if target == src_path => true,
        Ok(_) => match (fs::canonicalize(link_path), fs::canonicalize(src_path)) {
            (Ok(resolved), Ok(expected)) => resolved == expected,
            _ => false,
        },
        // Not a symlink at all.
        Err(_) => false,
    }
}
