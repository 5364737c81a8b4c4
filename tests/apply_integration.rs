//! Decide from real files on disk and apply the result.

use assert_fs::prelude::*;
use std::fs;

use tag_rename::{apply, decide_path, plan, Plan, RenameDecision, RuleConfig, TagRenameError};

#[test]
fn untagged_file_is_renamed_from_its_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("3. Baz.txt");
    src.write_str("not media").unwrap();

    let rules = RuleConfig::default();
    let decision = decide_path(src.path(), &rules).unwrap();
    assert_eq!(
        decision,
        RenameDecision::RenameOnly {
            new_base_name: "03 - Baz.txt".into()
        }
    );

    let dest = apply(src.path(), &decision, false).unwrap().expect("moved");
    assert_eq!(dest, temp.path().join("03 - Baz.txt"));
    assert!(!src.path().exists());
    assert_eq!(fs::read_to_string(&dest).unwrap(), "not media");
}

#[test]
fn already_organized_file_is_skipped() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("03 - Baz.txt");
    src.touch().unwrap();

    let decision = decide_path(src.path(), &RuleConfig::default()).unwrap();
    assert_eq!(plan(src.path(), &decision).unwrap(), Plan::Skip);
    assert_eq!(apply(src.path(), &decision, false).unwrap(), None);
    assert!(src.path().exists());
}

#[test]
fn backups_move_into_sibling_folder() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("song.bak");
    src.write_str("old").unwrap();

    let decision = decide_path(src.path(), &RuleConfig::default()).unwrap();
    let dest = apply(src.path(), &decision, false).unwrap().expect("moved");

    assert_eq!(dest, temp.path().join("backups").join("song.bak"));
    assert!(dest.exists());
}

#[test]
fn distribution_root_sorts_untagged_files_into_misc() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("incoming/05 - Track.txt");
    src.write_str("x").unwrap();
    let root = temp.child("library");

    let rules = RuleConfig {
        distribution_root: Some(root.path().display().to_string()),
        ..RuleConfig::default()
    };
    let decision = decide_path(src.path(), &rules).unwrap();
    let dest = apply(src.path(), &decision, false).unwrap().expect("moved");

    assert_eq!(dest, root.path().join("misc").join("05 - Track.txt"));
    assert!(dest.exists());
}

#[test]
fn directories_and_desktop_ini_are_left_alone() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dir = temp.child("Album");
    dir.create_dir_all().unwrap();
    let ini = temp.child("desktop.ini");
    ini.touch().unwrap();

    for p in [dir.path(), ini.path()] {
        let decision = decide_path(p, &RuleConfig::default()).unwrap();
        assert_eq!(decision, RenameDecision::Skip);
        assert_eq!(apply(p, &decision, false).unwrap(), None);
        assert!(p.exists());
    }
}

#[test]
fn missing_path_is_source_not_found() {
    let temp = assert_fs::TempDir::new().unwrap();
    let err = decide_path(&temp.path().join("nope.mp3"), &RuleConfig::default()).unwrap_err();
    let typed = err.downcast_ref::<TagRenameError>().expect("typed error");
    assert!(matches!(typed, TagRenameError::SourceNotFound(_)));
    assert_eq!(typed.code(), 10);
}

#[test]
fn collision_leaves_both_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("1. Same.txt");
    src.write_str("new").unwrap();
    let existing = temp.child("01 - Same.txt");
    existing.write_str("old").unwrap();

    let decision = decide_path(src.path(), &RuleConfig::default()).unwrap();
    let err = apply(src.path(), &decision, false).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TagRenameError>(),
        Some(TagRenameError::DestinationExists(_))
    ));
    assert_eq!(fs::read_to_string(existing.path()).unwrap(), "old");
    assert_eq!(fs::read_to_string(src.path()).unwrap(), "new");
}

#[test]
fn second_run_over_relative_root_output_is_a_skip() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("05 - Track.txt");
    src.write_str("x").unwrap();
    let rules = RuleConfig {
        distribution_root: Some("lib".into()),
        ..RuleConfig::default()
    };

    let decision = decide_path(src.path(), &rules).unwrap();
    let first = apply(src.path(), &decision, false).unwrap().expect("moved");
    assert_eq!(first, temp.path().join("lib").join("misc").join("05 - Track.txt"));

    let again = decide_path(&first, &rules).unwrap();
    assert_eq!(apply(&first, &again, false).unwrap(), None);
    assert!(first.exists());
    assert!(!temp.child("lib/misc/lib").path().exists());
}

#[test]
fn second_run_over_backups_is_a_skip() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("a.bak");
    src.touch().unwrap();

    let decision = decide_path(src.path(), &RuleConfig::default()).unwrap();
    let first = apply(src.path(), &decision, false).unwrap().expect("moved");
    assert_eq!(first, temp.path().join("backups").join("a.bak"));

    let again = decide_path(&first, &RuleConfig::default()).unwrap();
    assert_eq!(apply(&first, &again, false).unwrap(), None);
    assert!(!temp.child("backups/backups").path().exists());
}

#[test]
fn extensionless_file_with_nothing_to_name_it_stays_put() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("README");
    src.touch().unwrap();
    let rules = RuleConfig {
        include_title: false,
        ..RuleConfig::default()
    };

    let decision = decide_path(src.path(), &rules).unwrap();
    assert_eq!(plan(src.path(), &decision).unwrap(), Plan::Skip);
    assert_eq!(apply(src.path(), &decision, false).unwrap(), None);
    assert!(src.path().exists());
}
