//! Inputs to the naming engine.
//! - TrackMetadata mirrors the tag fields the host extracted.
//! - FilenameDerivedInfo is the fallback parsed from the file name.
//! - FileContext describes the item being renamed.

use std::path::Path;

/// Tag fields read from a media file. Every field is optional.
///
/// Position and total fields keep the tag convention that `0` means "not set";
/// use [`TrackMetadata::track_pos`] and friends to read them with that rule applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub year: Option<String>,
    pub track_pos: Option<u32>,
    pub track_total: Option<u32>,
    pub disk_pos: Option<u32>,
    pub disk_total: Option<u32>,
}

impl TrackMetadata {
    /// Track position, treating zero as absent.
    pub fn track_pos(&self) -> Option<u32> {
        not_null(self.track_pos)
    }

    pub fn track_total(&self) -> Option<u32> {
        not_null(self.track_total)
    }

    pub fn disk_pos(&self) -> Option<u32> {
        not_null(self.disk_pos)
    }

    pub fn disk_total(&self) -> Option<u32> {
        not_null(self.disk_total)
    }

    /// True when the comment marks the item as part of a multi-artist collection.
    pub fn is_collection(&self) -> bool {
        self.comment.as_deref() == Some(COLLECTION_COMMENT)
    }
}

/// Comment value that flags a compilation.
pub const COLLECTION_COMMENT: &str = "collection";

/// Best-effort information recovered from a file name when tags are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameDerivedInfo {
    pub title: Option<String>,
    pub track_pos: Option<u32>,
}

impl FilenameDerivedInfo {
    pub fn track_pos(&self) -> Option<u32> {
        not_null(self.track_pos)
    }
}

/// Naming facts about the item itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContext {
    /// Name without extension
    pub current_base_name: String,
    /// Extension without the dot; empty if none
    pub current_suffix: String,
    /// Preferred extension for the detected format; empty if unknown
    pub suitable_suffix: String,
    /// Full name including extension
    pub current_name: String,
    pub is_file: bool,
}

impl FileContext {
    /// Build a context from a path. `suitable_suffix` is left empty; fill it from the
    /// detected container type when known.
    pub fn from_path(path: &Path) -> Self {
        let current_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let current_base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let current_suffix = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        // symlink_metadata: a link to a file is not organized as the file itself.
        let is_file = std::fs::symlink_metadata(path)
            .map(|m| m.file_type().is_file())
            .unwrap_or(false);

        Self {
            current_base_name,
            current_suffix,
            suitable_suffix: String::new(),
            current_name,
            is_file,
        }
    }

    pub fn is_directory(&self) -> bool {
        !self.is_file
    }
}

#[inline]
fn not_null(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}
