//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use anyhow::{anyhow, Context, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file (or a directory holding config.xml).
pub const CONFIG_ENV: &str = "TAG_RENAME_CONFIG";

const APP_DIR: &str = "tag_rename";
const CONFIG_FILE: &str = "config.xml";
const LOG_FILE: &str = "tag_rename.log";

/// Config path from `TAG_RENAME_CONFIG`, if set. Relative values resolve against
/// the current directory; a directory value means `<dir>/config.xml`.
pub fn env_config_path() -> Result<Option<PathBuf>> {
    let Some(raw) = env::var_os(CONFIG_ENV) else {
        return Ok(None);
    };
    let mut path = PathBuf::from(raw);
    if path.is_relative() {
        path = env::current_dir()
            .context("resolve current directory for relative config path")?
            .join(path);
    }
    if path.is_dir() {
        path.push(CONFIG_FILE);
    }
    Ok(Some(path))
}

/// Config path in use: the env override if set, else the OS config dir.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env_config_path()? {
        return Ok(p);
    }
    if let Some(base) = config_dir() {
        return Ok(base.join(APP_DIR).join(CONFIG_FILE));
    }
    env::var_os("HOME")
        .map(|h| PathBuf::from(h).join(".config").join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| anyhow!("cannot determine a config directory (no config dir or HOME)"))
}

/// Default log file. Colocated with an env-override config; otherwise in the OS data dir.
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(cfg) = env_config_path()? {
        let dir = cfg.parent().map(Path::to_path_buf).unwrap_or_default();
        return Ok(dir.join(LOG_FILE));
    }
    if let Some(base) = data_dir() {
        return Ok(base.join(APP_DIR).join(LOG_FILE));
    }
    env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join(APP_DIR)
                .join(LOG_FILE)
        })
        .ok_or_else(|| anyhow!("cannot determine a data directory (no data dir or HOME)"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
