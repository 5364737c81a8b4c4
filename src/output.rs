//! User-facing printing with colored prefixes.
//! Colors are enabled only when stdout is a TTY.

use owo_colors::OwoColorize;
use std::path::Path;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn label(text: &str, paint: fn(&str) -> String) -> String {
    if is_tty() { paint(text) } else { text.to_string() }
}

pub fn print_info(msg: &str) {
    println!("{} {}", label("info:", |s| s.cyan().bold().to_string()), msg);
}

pub fn print_warn(msg: &str) {
    eprintln!("{} {}", label("warn:", |s| s.yellow().bold().to_string()), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", label("error:", |s| s.red().bold().to_string()), msg);
}

pub fn print_success(msg: &str) {
    println!("{} {}", label("ok:", |s| s.green().bold().to_string()), msg);
}

/// Plain line without prefix, for output users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// `skip: <path>`
pub fn print_skipped(path: &Path) {
    print_user(&format!("skip: {}", path.display()));
}

/// `<from> -> <to>`
pub fn print_moved(from: &Path, to: &Path) {
    print_user(&format!("{} -> {}", from.display(), to.display()));
}
