//! Verify XML config is parsed and used without touching user state.

use std::fs;
use tempfile::tempdir;

use tag_rename::{load_config_from_xml_path, LogLevel};

#[test]
fn reads_config_xml_and_applies_values() {
    let td = tempdir().expect("create tempdir");

    let cfg_path = td.path().join("config.xml");
    let sorted = td.path().join("sorted");
    let log_file = td.path().join("tag_rename.log");

    let xml = format!(
        r#"
<config>
  <log_level>debug</log_level>
  <log_file>{}</log_file>
  <distribution_root>{}</distribution_root>
  <naming field_separator=" · " include_artist="true" include_title="false" collections_label="VA"/>
</config>
"#,
        log_file.display(),
        sorted.display()
    );
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load_config_from_xml_path");

    assert_eq!(cfg.log_level, LogLevel::Debug, "log_level mismatch");
    assert_eq!(
        cfg.log_file.as_deref(),
        Some(log_file.as_path()),
        "log_file mismatch"
    );
    let root = sorted.display().to_string();
    assert_eq!(cfg.rules.distribution_root.as_deref(), Some(root.as_str()));
    assert_eq!(cfg.rules.field_separator, " · ");
    assert_eq!(cfg.rules.title_separator, " - ", "unset attribute keeps default");
    assert!(cfg.rules.include_artist);
    assert!(!cfg.rules.include_album);
    assert!(!cfg.rules.include_title);
    assert_eq!(cfg.rules.misc_label, "misc");
    assert_eq!(cfg.rules.collections_label, "VA");
    assert!(!cfg.dry_run);
}

#[test]
fn malformed_xml_reports_the_path() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("broken.xml");
    fs::write(&cfg_path, "<config><naming include_artist=\"maybe\"/></config>").unwrap();

    let err = load_config_from_xml_path(&cfg_path).unwrap_err();
    assert!(
        format!("{err:#}").contains("broken.xml"),
        "error should name the file: {err:#}"
    );
}

#[test]
fn missing_file_is_an_error() {
    let td = tempdir().unwrap();
    assert!(load_config_from_xml_path(&td.path().join("nope.xml")).is_err());
}
