//! Filesystem side: plan and perform the rename/move a decision asks for.

mod execute;
mod helpers;
mod plan;

pub use execute::execute;
pub use helpers::io_error_with_help;
pub use plan::{plan, Plan};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::naming::RenameDecision;

/// Plan and execute in one step.
pub fn apply(path: &Path, decision: &RenameDecision, dry_run: bool) -> Result<Option<PathBuf>> {
    execute(&plan(path, decision)?, dry_run)
}
