//! New file name assembly: `[artist, album, position] + title + .suffix`.

use crate::metadata::{FileContext, FilenameDerivedInfo, TrackMetadata};

use super::position::position_field;
use super::rules::RuleConfig;
use super::sanitize::valid_file_name;

/// Build the new file name (suffix included) for a file.
pub fn assemble_name(
    context: &FileContext,
    meta: &TrackMetadata,
    from_file_name: &FilenameDerivedInfo,
    rules: &RuleConfig,
) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(3);

    let artist = valid_file_name(meta.artist.as_deref());
    if rules.include_artist && !meta.is_collection() && !artist.is_empty() {
        fields.push(artist);
    }

    // Presence is checked on the raw tag: an album that sanitizes to nothing still
    // occupies its slot.
    if rules.include_album && meta.album.as_deref().is_some_and(|a| !a.is_empty()) {
        fields.push(valid_file_name(meta.album.as_deref()));
    }

    if let Some(pos) = position_field(meta, from_file_name) {
        fields.push(pos);
    }

    let mut name = fields.join(rules.field_separator.as_str());

    if rules.include_title {
        let mut title = valid_file_name(meta.title.as_deref());
        if title.is_empty() {
            title = valid_file_name(from_file_name.title.as_deref());
        }
        if !name.is_empty() {
            name.push_str(&rules.title_separator);
        }
        name.push_str(&title);
    }

    let suffix = if !context.suitable_suffix.is_empty() {
        context.suitable_suffix.as_str()
    } else {
        context.current_suffix.as_str()
    };
    if !suffix.is_empty() {
        name.push('.');
        name.push_str(suffix);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo_bar_baz() -> TrackMetadata {
        TrackMetadata {
            artist: Some("Foo".into()),
            album: Some("Bar".into()),
            title: Some("Baz".into()),
            track_pos: Some(3),
            track_total: Some(12),
            ..Default::default()
        }
    }

    fn all_fields() -> RuleConfig {
        RuleConfig {
            include_artist: true,
            include_album: true,
            ..RuleConfig::default()
        }
    }

    #[test]
    fn default_rules_give_position_and_title() {
        let name = assemble_name(
            &FileContext::default(),
            &foo_bar_baz(),
            &Default::default(),
            &RuleConfig::default(),
        );
        assert_eq!(name, "03 - Baz");
    }

    #[test]
    fn all_fields_joined_with_separators() {
        let ctx = FileContext {
            current_suffix: "mp3".into(),
            ..Default::default()
        };
        let name = assemble_name(&ctx, &foo_bar_baz(), &Default::default(), &all_fields());
        assert_eq!(name, "Foo, Bar, 03 - Baz.mp3");
    }

    #[test]
    fn collection_suppresses_artist() {
        let mut meta = foo_bar_baz();
        meta.comment = Some("collection".into());
        let name = assemble_name(&FileContext::default(), &meta, &Default::default(), &all_fields());
        assert_eq!(name, "Bar, 03 - Baz");
    }

    #[test]
    fn album_presence_uses_raw_value() {
        let mut meta = foo_bar_baz();
        meta.album = Some("???".into());
        meta.artist = None;
        let name = assemble_name(&FileContext::default(), &meta, &Default::default(), &all_fields());
        assert_eq!(name, ", 03 - Baz");
    }

    #[test]
    fn title_falls_back_to_file_name() {
        let meta = TrackMetadata {
            title: Some("".into()),
            ..Default::default()
        };
        let from_name = FilenameDerivedInfo {
            title: Some("From: Name".into()),
            track_pos: Some(2),
        };
        let name = assemble_name(&FileContext::default(), &meta, &from_name, &RuleConfig::default());
        assert_eq!(name, "02 - From Name");
    }

    #[test]
    fn title_excluded_leaves_prefix_only() {
        let rules = RuleConfig {
            include_title: false,
            ..all_fields()
        };
        let name = assemble_name(&FileContext::default(), &foo_bar_baz(), &Default::default(), &rules);
        assert_eq!(name, "Foo, Bar, 03");
    }

    #[test]
    fn suitable_suffix_preferred_over_current() {
        let ctx = FileContext {
            current_suffix: "mp3".into(),
            suitable_suffix: "flac".into(),
            ..Default::default()
        };
        let name = assemble_name(&ctx, &foo_bar_baz(), &Default::default(), &RuleConfig::default());
        assert_eq!(name, "03 - Baz.flac");
    }

    #[test]
    fn empty_field_separator_concatenates() {
        let rules = RuleConfig {
            field_separator: String::new(),
            ..all_fields()
        };
        let name = assemble_name(&FileContext::default(), &foo_bar_baz(), &Default::default(), &rules);
        assert_eq!(name, "FooBar03 - Baz");
    }

    #[test]
    fn nothing_known_gives_bare_suffix() {
        let ctx = FileContext {
            current_suffix: "ogg".into(),
            ..Default::default()
        };
        let name = assemble_name(&ctx, &Default::default(), &Default::default(), &RuleConfig::default());
        assert_eq!(name, ".ogg");
    }
}
