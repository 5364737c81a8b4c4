//! Distribution directory: `<root>/<artist|collections|misc>/<year - album|misc>/<Disk NN>`.

use crate::metadata::TrackMetadata;

use super::position::disk_folder;
use super::rules::RuleConfig;
use super::sanitize::valid_directory_name;

/// Relative directory (segments joined with `/`) for a file, or None when no
/// distribution root is configured.
pub fn distribution_directory(meta: &TrackMetadata, rules: &RuleConfig) -> Option<String> {
    let root = rules.distribution_root.as_deref()?;
    let mut segments: Vec<String> = vec![root.to_string()];

    let artist = valid_directory_name(meta.artist.as_deref());
    if meta.is_collection() {
        segments.push(rules.collections_label.clone());
    } else if !artist.is_empty() {
        segments.push(artist.clone());
    } else {
        segments.push(rules.misc_label.clone());
    }

    let album = valid_directory_name(meta.album.as_deref());
    if !album.is_empty() {
        match meta.year.as_deref().filter(|y| !y.is_empty()) {
            Some(year) => {
                // "2001-2002" and "2001-05-03" both file under 2001
                let year = year.split('-').next().unwrap_or_default();
                segments.push(format!("{} - {}", valid_directory_name(Some(year)), album));
            }
            None => segments.push(album),
        }
    } else if !artist.is_empty() {
        // TODO: decide whether album-less artists should keep their files directly in
        // the artist folder instead of the misc leaf.
        segments.push(rules.misc_label.clone());
    }

    if let Some(disk) = disk_folder(meta) {
        segments.push(disk);
    }

    Some(segments.join("/"))
}
