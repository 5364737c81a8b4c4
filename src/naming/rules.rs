//! Naming rule settings.

pub const FIELD_SEPARATOR_DEFAULT: &str = ", ";
pub const TITLE_SEPARATOR_DEFAULT: &str = " - ";
pub const MISC_LABEL_DEFAULT: &str = "misc";
pub const COLLECTIONS_LABEL_DEFAULT: &str = "collections";

/// Immutable settings threaded into every naming decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Joins artist, album and position fields
    pub field_separator: String,
    /// Joins the assembled prefix to the title
    pub title_separator: String,
    pub include_artist: bool,
    pub include_album: bool,
    pub include_title: bool,
    /// Root of the artist/album tree; None disables moving
    pub distribution_root: Option<String>,
    pub misc_label: String,
    pub collections_label: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            field_separator: FIELD_SEPARATOR_DEFAULT.into(),
            title_separator: TITLE_SEPARATOR_DEFAULT.into(),
            include_artist: false,
            include_album: false,
            include_title: true,
            distribution_root: None,
            misc_label: MISC_LABEL_DEFAULT.into(),
            collections_label: COLLECTIONS_LABEL_DEFAULT.into(),
        }
    }
}
