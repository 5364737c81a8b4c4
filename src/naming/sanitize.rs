//! Character stripping for generated names.
//!
//! Both sanitizers are total: any input, including an empty string, yields a
//! (possibly empty) string.

/// Replacement for `/` and `\`.
const SEPARATOR_REPLACEMENT: &str = " - ";

/// Characters removed from file names.
pub const FILE_NAME_STRIPPED: &[char] = &['<', '>', '?', '!', '*', '|', ':', '"', '\n', '\u{c}', '\r'];

/// Characters removed from directory names (file set plus `.`).
pub const DIRECTORY_NAME_STRIPPED: &[char] = &[
    '<', '>', '?', '!', '*', '|', ':', '"', '.', '\n', '\u{c}', '\r',
];

/// Copy of `name` that is safe as a file name. Absent input gives an empty string.
pub fn valid_file_name(name: Option<&str>) -> String {
    sanitize(name, FILE_NAME_STRIPPED)
}

/// Copy of `name` that is safe as a single directory component.
pub fn valid_directory_name(name: Option<&str>) -> String {
    sanitize(name, DIRECTORY_NAME_STRIPPED)
}

fn sanitize(name: Option<&str>, stripped: &[char]) -> String {
    let Some(name) = name else {
        return String::new();
    };
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '/' | '\\' => out.push_str(SEPARATOR_REPLACEMENT),
            c if stripped.contains(&c) => {}
            c => out.push(c),
        }
    }
    out
}

/// True when `s` would pass through the file-name sanitizer unchanged.
pub fn is_clean_file_component(s: &str) -> bool {
    !s.chars()
        .any(|c| c == '/' || c == '\\' || FILE_NAME_STRIPPED.contains(&c))
}

/// True when `s` would pass through the directory-name sanitizer unchanged.
pub fn is_clean_directory_component(s: &str) -> bool {
    !s.chars()
        .any(|c| c == '/' || c == '\\' || DIRECTORY_NAME_STRIPPED.contains(&c))
}
