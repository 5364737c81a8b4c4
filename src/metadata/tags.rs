//! Tag extraction via lofty.
//! Reads the primary tag (or the first tag present) and maps it onto TrackMetadata.

use anyhow::Result;
use lofty::file::{FileType, TaggedFileExt};
use lofty::tag::{Accessor, ItemKey, Tag};
use std::path::Path;
use tracing::debug;

use crate::errors::TagRenameError;

use super::types::TrackMetadata;

/// Tag fields plus the container type lofty detected.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub metadata: TrackMetadata,
    pub file_type: FileType,
}

/// Read tags from a media file.
///
/// Files lofty cannot identify fail with [`TagRenameError::Metadata`]; callers that
/// organize arbitrary files fall back to `TrackMetadata::default()`.
pub fn read_track_metadata(path: &Path) -> Result<ParsedFile> {
    let tagged = lofty::probe::read_from_path(path).map_err(|e| TagRenameError::Metadata {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let file_type = tagged.file_type();
    let metadata = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .map(metadata_from_tag)
        .unwrap_or_default();

    debug!(path = %path.display(), ?file_type, ?metadata, "Read tags");
    Ok(ParsedFile {
        metadata,
        file_type,
    })
}

fn metadata_from_tag(tag: &Tag) -> TrackMetadata {
    let year = [ItemKey::RecordingDate, ItemKey::Year]
        .iter()
        .find_map(|key| date_text(tag, key));

    TrackMetadata {
        artist: tag.artist().map(|s| s.into_owned()),
        album: tag.album().map(|s| s.into_owned()),
        title: tag.title().map(|s| s.into_owned()),
        comment: tag.comment().map(|s| s.into_owned()),
        year,
        track_pos: tag.track(),
        track_total: tag.track_total(),
        disk_pos: tag.disk(),
        disk_total: tag.disk_total(),
    }
}

/// First non-blank text value stored under `key`.
fn date_text(tag: &Tag, key: &ItemKey) -> Option<String> {
    tag.items()
        .filter(|item| item.key() == *key)
        .filter_map(|item| item.value().text())
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}

/// Preferred suffix for a container type plus the aliases that are accepted as-is.
fn suffixes_for(file_type: &FileType) -> &'static [&'static str] {
    match file_type {
        FileType::Mpeg => &["mp3", "mp2", "mp1"],
        FileType::Flac => &["flac"],
        FileType::Mp4 => &["m4a", "m4b", "m4p", "m4r", "mp4", "m4v"],
        FileType::Vorbis => &["ogg", "oga"],
        FileType::Opus => &["opus", "ogg"],
        FileType::Speex => &["spx", "ogg"],
        FileType::Wav => &["wav", "wave"],
        FileType::Aiff => &["aiff", "aif", "aifc"],
        FileType::Ape => &["ape"],
        FileType::WavPack => &["wv"],
        FileType::Aac => &["aac"],
        FileType::Mpc => &["mpc", "mp+", "mpp"],
        _ => &[],
    }
}

/// Suffix that fits the detected format. Keeps `current_suffix` when it is already
/// an accepted alias (case-insensitive); empty when the format is unknown.
pub fn suitable_suffix(file_type: &FileType, current_suffix: &str) -> String {
    let accepted = suffixes_for(file_type);
    if accepted
        .iter()
        .any(|s| s.eq_ignore_ascii_case(current_suffix))
    {
        return current_suffix.to_string();
    }
    accepted.first().map(|s| s.to_string()).unwrap_or_default()
}
