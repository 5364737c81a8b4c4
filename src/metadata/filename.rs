//! Title and track position heuristics for untagged files.
//!
//! Recognized shapes (first match wins):
//!   `03 - Title`, `03. Title`, `03_Title`, `1-03 Title` (disk-track; track is used)
//!   `Artist - 03 - Title` (a purely numeric ` - ` segment)
//!   anything else: the whole name is the title

use super::types::FilenameDerivedInfo;

/// Parse a file base name (no extension) into a title and track position.
pub fn parse_file_name(base_name: &str) -> FilenameDerivedInfo {
    let name = base_name.trim();
    if name.is_empty() {
        return FilenameDerivedInfo::default();
    }

    if let Some((track_pos, rest)) = leading_position(name) {
        return FilenameDerivedInfo {
            title: non_empty(rest.trim_start_matches(is_separator).trim()),
            track_pos: Some(track_pos),
        };
    }

    let segments: Vec<&str> = name.split(" - ").collect();
    if segments.len() > 1 {
        let numeric = segments
            .iter()
            .enumerate()
            .find_map(|(idx, s)| parse_digits(s.trim()).map(|n| (idx, n)));
        if let Some((idx, track_pos)) = numeric {
            return FilenameDerivedInfo {
                title: non_empty(segments[idx + 1..].join(" - ").trim()),
                track_pos: Some(track_pos),
            };
        }
    }

    FilenameDerivedInfo {
        title: Some(name.to_string()),
        track_pos: None,
    }
}

/// Leading `NN` or `D-NN` followed by a separator or the end of the name.
fn leading_position(name: &str) -> Option<(u32, &str)> {
    let (first, rest) = split_digits(name)?;
    let (track, rest) = match rest.strip_prefix('-').and_then(split_digits) {
        Some((second, after)) if after.is_empty() || after.starts_with(is_separator) => {
            (second, after)
        }
        _ => (first, rest),
    };
    if !(rest.is_empty() || rest.starts_with(is_separator)) {
        return None;
    }
    Some((parse_digits(track)?, rest))
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(s.split_at(end))
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '.' | '-' | '_')
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}
