//! Carry out a Plan.
//! Attempts an atomic rename; on failure other than permission problems (e.g.
//! across filesystems) falls back to copy into a temp file + rename + remove source.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::TagRenameError;
use crate::shutdown;

use super::helpers::{io_error_with_help, unique_temp_path};
use super::plan::Plan;

/// Execute `plan`. Returns the destination, or None when nothing was done.
///
/// Never overwrites: an existing destination fails with
/// [`TagRenameError::DestinationExists`]. In dry-run mode only logs.
pub fn execute(plan: &Plan, dry_run: bool) -> Result<Option<PathBuf>> {
    let (from, to) = match plan {
        Plan::Skip => return Ok(None),
        Plan::Relocate { from, to } => (from.as_path(), to.as_path()),
    };

    shutdown::check()?;

    if fs::symlink_metadata(from).is_err() {
        return Err(TagRenameError::SourceNotFound(from.to_path_buf()).into());
    }
    if fs::symlink_metadata(to).is_ok() && !same_file(from, to) {
        return Err(TagRenameError::DestinationExists(to.to_path_buf()).into());
    }

    if dry_run {
        info!(src = %from.display(), dest = %to.display(), "dry-run: would move file");
        return Ok(Some(to.to_path_buf()));
    }

    if let Some(dir) = to.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_error_with_help("create destination directory", dir))?;
    }

    match fs::rename(from, to) {
        Ok(()) => {
            info!(src = %from.display(), dest = %to.display(), "Renamed file atomically");
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(io_error_with_help("rename", from)(e));
        }
        Err(e) => {
            let hint = if e.kind() == io::ErrorKind::CrossesDevices {
                "cross-filesystem; will copy instead"
            } else {
                "falling back to copy"
            };
            warn!(error = %e, hint, "Atomic rename failed, using safe copy+rename");
            copy_and_rename(from, to)?;
            fs::remove_file(from).map_err(io_error_with_help("remove original file", from))?;
            info!(src = %from.display(), dest = %to.display(), "Copied file and removed source");
        }
    }
    Ok(Some(to.to_path_buf()))
}

/// Copy into a hidden temp file next to `dest`, then rename it into place.
fn copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dir = dest
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let tmp = unique_temp_path(dir);

    fs::copy(src, &tmp).map_err(io_error_with_help("copy to temporary file", &tmp))?;
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| {
            format!("rename temporary file '{}' -> '{}'", tmp.display(), dest.display())
        });
    }
    Ok(())
}

/// Case-only renames on case-insensitive filesystems see the source as the target.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => {
            let same = a == b;
            if same {
                debug!(path = %a.display(), "Destination resolves to the source itself");
            }
            same
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn relocate_creates_directories_and_moves() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("a.mp3");
        src.write_str("data").unwrap();
        let dest = temp.child("sorted/Foo/Bar/01 - A.mp3");

        let plan = Plan::Relocate {
            from: src.path().to_path_buf(),
            to: dest.path().to_path_buf(),
        };
        let out = execute(&plan, false).expect("execute should succeed");

        assert_eq!(out.as_deref(), Some(dest.path()));
        assert!(!src.path().exists());
        assert_eq!(std::fs::read_to_string(dest.path()).unwrap(), "data");
    }

    #[test]
    fn dry_run_leaves_everything_in_place() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("a.mp3");
        src.touch().unwrap();
        let dest = temp.child("new/b.mp3");

        let plan = Plan::Relocate {
            from: src.path().to_path_buf(),
            to: dest.path().to_path_buf(),
        };
        let out = execute(&plan, true).unwrap();

        assert_eq!(out.as_deref(), Some(dest.path()));
        assert!(src.path().exists());
        assert!(!temp.child("new").path().exists());
    }

    #[test]
    fn existing_destination_is_not_overwritten() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("a.mp3");
        src.write_str("new").unwrap();
        let dest = temp.child("b.mp3");
        dest.write_str("old").unwrap();

        let plan = Plan::Relocate {
            from: src.path().to_path_buf(),
            to: dest.path().to_path_buf(),
        };
        let err = execute(&plan, false).unwrap_err();
        let typed = err.downcast_ref::<TagRenameError>().expect("typed");
        assert!(matches!(typed, TagRenameError::DestinationExists(_)));
        assert_eq!(std::fs::read_to_string(dest.path()).unwrap(), "old");
        assert!(src.path().exists());
    }

    #[test]
    fn missing_source_is_reported() {
        let temp = assert_fs::TempDir::new().unwrap();
        let plan = Plan::Relocate {
            from: temp.child("gone.mp3").path().to_path_buf(),
            to: temp.child("b.mp3").path().to_path_buf(),
        };
        let err = execute(&plan, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TagRenameError>(),
            Some(TagRenameError::SourceNotFound(_))
        ));
    }

    #[test]
    fn copy_and_rename_leaves_no_temp_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("a.mp3");
        src.write_str("payload").unwrap();
        let dest_dir = temp.child("out");
        dest_dir.create_dir_all().unwrap();
        let dest = dest_dir.child("b.mp3");

        copy_and_rename(src.path(), dest.path()).unwrap();

        assert_eq!(std::fs::read_to_string(dest.path()).unwrap(), "payload");
        let names: Vec<_> = std::fs::read_dir(dest_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn skip_does_nothing() {
        assert_eq!(execute(&Plan::Skip, false).unwrap(), None);
    }
}
