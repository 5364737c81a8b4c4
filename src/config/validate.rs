//! Config validation logic.
//! Rejects naming settings that would let generated names escape their directory or
//! carry characters the sanitizers strip.

use anyhow::Result;
use tracing::{debug, error};

use crate::errors::TagRenameError;
use crate::naming::{is_clean_directory_component, is_clean_file_component};

use super::types::Config;

impl Config {
    /// Validate naming rules and the log file location.
    pub fn validate(&self) -> Result<()> {
        let rules = &self.rules;

        ensure_clean_separator("field_separator", &rules.field_separator)?;
        ensure_clean_separator("title_separator", &rules.title_separator)?;
        ensure_label("misc_label", &rules.misc_label)?;
        ensure_label("collections_label", &rules.collections_label)?;

        if let Some(root) = &rules.distribution_root
            && root.trim().is_empty()
        {
            return Err(invalid("distribution_root", "must not be empty when set".into()));
        }

        if let Some(log_file) = &self.log_file
            && log_file.is_dir()
        {
            return Err(invalid(
                "log_file",
                format!("'{}' is a directory", log_file.display()),
            ));
        }

        debug!(
            "Config validated: distribution_root='{}' log_file='{}'",
            rules.distribution_root.as_deref().unwrap_or("<none>"),
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> anyhow::Error {
    error!(field, %reason, "Invalid configuration");
    TagRenameError::InvalidConfig { field, reason }.into()
}

/// Separators end up inside file names; empty is allowed.
fn ensure_clean_separator(field: &'static str, value: &str) -> Result<()> {
    if !is_clean_file_component(value) {
        return Err(invalid(
            field,
            format!("'{}' contains a path separator or a character stripped from file names", value.escape_debug()),
        ));
    }
    Ok(())
}

/// Labels become directory names of their own.
fn ensure_label(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty".into()));
    }
    if !is_clean_directory_component(value) {
        return Err(invalid(
            field,
            format!("'{}' contains a path separator or a character stripped from directory names", value.escape_debug()),
        ));
    }
    Ok(())
}
