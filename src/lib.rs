//! Core library for `tag_rename`.
//!
//! - `naming`: pure rules turning tags into a new file name and directory.
//! - `metadata`: reading tags (lofty) and file-name fallbacks.
//! - `apply`: performing the resulting rename/move.
//! - `config`: XML config, defaults and validation.

pub mod apply;
pub mod cli;
pub mod config;
pub mod errors;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod shutdown;

pub use apply::{apply, execute, plan, Plan};
pub use config::{
    default_config_path, default_log_path, load_config_from_xml_path, path_has_symlink_ancestor,
    Config, LogLevel,
};
pub use errors::TagRenameError;
pub use metadata::{gather, FileContext, FilenameDerivedInfo, TrackMetadata};
pub use naming::{decide, RenameDecision, RuleConfig};

use anyhow::Result;
use std::path::Path;

/// Gather everything known about `path` and decide what to do with it.
pub fn decide_path(path: &Path, rules: &RuleConfig) -> Result<RenameDecision> {
    if std::fs::symlink_metadata(path).is_err() {
        return Err(TagRenameError::SourceNotFound(path.to_path_buf()).into());
    }
    let g = gather(path);
    Ok(decide(&g.context, &g.metadata, &g.from_file_name, rules))
}
