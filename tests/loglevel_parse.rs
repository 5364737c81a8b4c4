use std::str::FromStr;
use tag_rename::LogLevel;

#[test]
fn parse_aliases_case_insensitive() {
    let cases = [
        ("quiet", LogLevel::Quiet),
        ("ERROR", LogLevel::Quiet),
        ("none", LogLevel::Quiet),
        ("Normal", LogLevel::Normal),
        ("info", LogLevel::Info),
        ("VERBOSE", LogLevel::Info),
        ("detailed", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("Trace", LogLevel::Debug),
    ];
    for (input, expected) in cases {
        assert_eq!(LogLevel::parse(input), Some(expected), "{input}");
    }
}

#[test]
fn display_parses_back() {
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        let s = lvl.to_string();
        assert_eq!(LogLevel::from_str(&s).as_ref(), Ok(&lvl), "{s}");
    }
}

#[test]
fn fromstr_invalid_is_err() {
    assert!(LogLevel::from_str("loud").is_err());
    assert!(LogLevel::from_str("").is_err());
}
