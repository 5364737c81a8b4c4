//! I/O helper utilities.
//!
//! Adapters that enrich io::Error with the operation, the path and a hint, for use
//! with map_err:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create dir", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::TagRenameError;

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            msg.push_str(" (permission denied; check ownership and write permissions)");
        }
        io::ErrorKind::NotFound => msg.push_str(" (path not found; verify it exists)"),
        io::ErrorKind::AlreadyExists => msg.push_str(" (already exists)"),
        io::ErrorKind::CrossesDevices => {
            msg.push_str(" (cross-filesystem; atomic rename not possible)");
        }
        io::ErrorKind::ReadOnlyFilesystem => msg.push_str(" (read-only filesystem)"),
        io::ErrorKind::StorageFull => msg.push_str(" (insufficient space on device)"),
        _ => {}
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Closure for `.map_err(...)` converting io::Error into anyhow::Error.
/// Permission problems become [`TagRenameError::PermissionDenied`] so callers can
/// report them with a stable code.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            anyhow::Error::from(TagRenameError::PermissionDenied {
                path: path.to_path_buf(),
                context: build_message(op, path, &e),
            })
        } else {
            anyhow!(build_message(op, path, &e))
        }
    }
}

/// Hidden temp path inside `dir` for copy-then-rename.
pub(super) fn unique_temp_path(dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dir.join(format!(".tag_rename.{}.{}.tmp", pid, nanos))
}
