//! Resolve a RenameDecision against the item's location.

use anyhow::{anyhow, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::naming::RenameDecision;

/// Concrete filesystem action for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Skip,
    Relocate { from: PathBuf, to: PathBuf },
}

/// Turn a decision into source/destination paths.
///
/// Relative directories are taken from the item's parent directory, unless the parent
/// already ends with that directory (the item was placed there by an earlier run). An
/// absolute directory (e.g. an absolute distribution root) stands on its own. An empty
/// new name keeps the current one. A decision that leaves the item where it already
/// is becomes `Plan::Skip`.
pub fn plan(path: &Path, decision: &RenameDecision) -> Result<Plan> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow!("Path has no parent directory: {}", path.display()))?;
    let current_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Path is missing a file name: {}", path.display()))?;

    let target_dir = |dir: &str| -> PathBuf {
        if parent.ends_with(dir) {
            parent.to_path_buf()
        } else {
            parent.join(dir)
        }
    };

    let to = match decision {
        RenameDecision::Skip => return Ok(Plan::Skip),
        RenameDecision::RenameOnly { new_base_name } => {
            parent.join(name_or(new_base_name, current_name))
        }
        RenameDecision::RenameAndMove {
            new_base_name,
            new_relative_directory,
        } => target_dir(new_relative_directory).join(name_or(new_base_name, current_name)),
        RenameDecision::MoveOnly {
            new_relative_directory,
        } => target_dir(new_relative_directory).join(current_name),
    };

    if to == path {
        return Ok(Plan::Skip);
    }
    Ok(Plan::Relocate {
        from: path.to_path_buf(),
        to,
    })
}

fn name_or<'a>(new_base_name: &'a str, current_name: &'a OsStr) -> &'a OsStr {
    if new_base_name.is_empty() {
        current_name
    } else {
        OsStr::new(new_base_name)
    }
}
