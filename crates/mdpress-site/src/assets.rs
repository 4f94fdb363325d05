//! Static asset copying.
//!
//! The output directory is rebuilt from scratch on every run: existing
//! contents are removed, then the static tree is copied over recursively so
//! stale files never survive a build.

use std::fs;
use std::io;
use std::path::Path;

/// Copy the static asset tree into a freshly recreated destination.
///
/// Removes `dest` if it exists, recreates it, then copies the contents of
/// `src` recursively. A missing `src` directory is not an error; the
/// destination is simply left empty.
///
/// # Errors
///
/// Returns any I/O error from removing, creating, or copying entries.
pub fn copy_static(src: &Path, dest: &Path) -> io::Result<()> {
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "Removing existing output directory");
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    if !src.exists() {
        tracing::warn!(path = %src.display(), "Static directory does not exist, skipping");
        return Ok(());
    }

    tracing::info!(from = %src.display(), to = %dest.display(), "Copying static assets");
    copy_dir_contents(src, dest)
}

/// Recursively copy the contents of one directory into another.
fn copy_dir_contents(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_dir_contents(&entry.path(), &target)?;
        } else {
            tracing::debug!(from = %entry.path().display(), to = %target.display(), "Copying file");
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
