//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Creates a template if missing (unless TAG_RENAME_CONFIG is set).
//!
//! Naming options are attributes of `<naming/>` so separators keep their
//! surrounding whitespace. Unknown elements or attributes are rejected.

use anyhow::{anyhow, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, env_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::naming::RuleConfig;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    distribution_root: Option<String>,
    naming: Option<XmlNaming>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlNaming {
    #[serde(rename = "@field_separator")]
    field_separator: Option<String>,
    #[serde(rename = "@title_separator")]
    title_separator: Option<String>,
    #[serde(rename = "@include_artist")]
    include_artist: Option<bool>,
    #[serde(rename = "@include_album")]
    include_album: Option<bool>,
    #[serde(rename = "@include_title")]
    include_title: Option<bool>,
    #[serde(rename = "@misc_label")]
    misc_label: Option<String>,
    #[serde(rename = "@collections_label")]
    collections_label: Option<String>,
}

/// Outcome of looking for the config file at startup.
#[derive(Debug)]
pub enum LoadResult {
    /// A config file was found and parsed
    Loaded(Config),
    /// TAG_RENAME_CONFIG points at a missing file; use defaults
    Defaults,
    /// No config at the default location; a template was written there
    CreatedTemplate(PathBuf),
}

fn trimmed_non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

// Map XmlConfig -> Config; absent values keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(level) = parsed.log_level.as_deref().and_then(|s| LogLevel::parse(s.trim())) {
        cfg.log_level = level;
    }
    cfg.log_file = trimmed_non_empty(parsed.log_file).map(PathBuf::from);

    let naming = parsed.naming.unwrap_or_default();
    let defaults = RuleConfig::default();
    cfg.rules = RuleConfig {
        field_separator: naming.field_separator.unwrap_or(defaults.field_separator),
        title_separator: naming.title_separator.unwrap_or(defaults.title_separator),
        include_artist: naming.include_artist.unwrap_or(defaults.include_artist),
        include_album: naming.include_album.unwrap_or(defaults.include_album),
        include_title: naming.include_title.unwrap_or(defaults.include_title),
        distribution_root: trimmed_non_empty(parsed.distribution_root),
        misc_label: naming.misc_label.unwrap_or(defaults.misc_label),
        collections_label: naming.collections_label.unwrap_or(defaults.collections_label),
    };

    cfg
}

/// Parse config XML text.
pub fn parse_config_xml(contents: &str) -> Result<Config> {
    let parsed: XmlConfig = from_xml_str(contents).context("parse config xml")?;
    Ok(xml_to_config(parsed))
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let cfg = parse_config_xml(&contents)
        .with_context(|| format!("load config '{}'", path.display()))?;
    debug!(path = %path.display(), ?cfg, "Loaded config");
    Ok(cfg)
}

/// Locate and load the config, writing a template on first run.
pub fn load_or_init() -> Result<LoadResult> {
    let env_set = env_config_path()?.is_some();
    let path = default_config_path()?;

    if path.exists() {
        return load_config_from_xml_path(&path).map(LoadResult::Loaded);
    }
    if env_set {
        debug!(path = %path.display(), "Config override points to a missing file; using defaults");
        return Ok(LoadResult::Defaults);
    }
    create_template_config(&path)?;
    Ok(LoadResult::CreatedTemplate(path))
}

/// Example config written on first run.
pub fn template_contents() -> String {
    let d = RuleConfig::default();
    format!(
        "<!--\n  tag_rename configuration (XML)\n\n  naming attributes:\n    field_separator    -> joins artist, album and track position\n    title_separator    -> joins those fields to the title\n    include_artist     -> true/false\n    include_album      -> true/false\n    include_title      -> true/false\n    misc_label         -> folder for items without artist/album\n    collections_label  -> folder for items whose comment is \"collection\"\n\n  Other fields:\n    distribution_root  -> move files below <root>/<artist>/<year - album>/ (empty = rename only)\n    log_level          -> quiet | normal | info | debug\n    log_file           -> path to log file (optional)\n\n  CLI flags override XML values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <distribution_root></distribution_root>\n  <naming field_separator=\"{}\" title_separator=\"{}\" include_artist=\"{}\" include_album=\"{}\" include_title=\"{}\" misc_label=\"{}\" collections_label=\"{}\"/>\n</config>\n",
        d.field_separator,
        d.title_separator,
        d.include_artist,
        d.include_album,
        d.include_title,
        d.misc_label,
        d.collections_label,
    )
}

/// Create the template config file and its parent directory.
/// Refuses to write below a symlinked ancestor and never replaces an existing file.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("create config file '{}'", path.display()))?;
    file.write_all(template_contents().as_bytes())
        .with_context(|| format!("write config file '{}'", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}
