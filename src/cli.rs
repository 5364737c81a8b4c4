//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Naming flags override values from config.xml.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};

/// Rename media files from their tags and optionally sort them into an
/// artist/album tree. CLI flags override config values.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename and sort media files using their tags"
)]
pub struct Args {
    /// Files to process. Directories are left alone.
    #[arg(
        value_name = "PATH",
        value_hint = ValueHint::AnyPath,
        required_unless_present = "print_config"
    )]
    pub paths: Vec<PathBuf>,

    /// Separator between artist, album and track position.
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub field_separator: Option<String>,

    /// Separator between those fields and the title.
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub title_separator: Option<String>,

    /// Put the artist into the file name.
    #[arg(long)]
    pub include_artist: bool,

    /// Put the album into the file name.
    #[arg(long)]
    pub include_album: bool,

    /// Leave the title out of the file name.
    #[arg(long)]
    pub exclude_title: bool,

    /// Move files below DIR/<artist>/<year - album>/ (relative to each file unless absolute).
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub distribution_root: Option<String>,

    /// Folder name for items without artist or album.
    #[arg(long, value_name = "NAME")]
    pub misc_label: Option<String>,

    /// Folder name for items tagged as part of a collection.
    #[arg(long, value_name = "NAME")]
    pub collections_label: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where tag_rename looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Dry-run: show decisions but do not modify the filesystem.
    #[arg(long, help = "Show what would be done, but do not rename or move anything")]
    pub dry_run: bool,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Paths with stray surrounding quotes removed (left behind by some shells).
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(|p| Self::sanitize_path(p)).collect()
    }

    fn sanitize_path(p: &Path) -> PathBuf {
        let s = p.to_string_lossy();
        let trimmed = s.trim();
        let inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        if inner.len() == s.len() {
            p.to_path_buf()
        } else {
            PathBuf::from(inner)
        }
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        let rules = &mut cfg.rules;
        if let Some(sep) = &self.field_separator {
            rules.field_separator = sep.clone();
        }
        if let Some(sep) = &self.title_separator {
            rules.title_separator = sep.clone();
        }
        if self.include_artist {
            rules.include_artist = true;
        }
        if self.include_album {
            rules.include_album = true;
        }
        if self.exclude_title {
            rules.include_title = false;
        }
        if let Some(root) = &self.distribution_root {
            rules.distribution_root = Some(root.clone());
        }
        if let Some(label) = &self.misc_label {
            rules.misc_label = label.clone();
        }
        if let Some(label) = &self.collections_label {
            rules.collections_label = label.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
