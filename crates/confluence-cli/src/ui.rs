//! UI helpers for CLI display.

use console::{style, StyledObject};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

fn paint<'a>(text: &'a str, styler: fn(StyledObject<&'a str>) -> StyledObject<&'a str>) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        styler(style(text)).to_string()
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    let line = format!("=== {text} ===");
    println!("{}", paint(&line, |s| s.bold().cyan()));
}

/// Print a section title.
pub fn print_section(text: &str) {
    println!("\n{}", paint(text, |s| s.bold()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{} {text}", paint("[OK]", |s| s.green().bold()));
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    eprintln!("{} {text}", paint("[WARN]", |s| s.yellow().bold()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", paint("[ERROR]", |s| s.red().bold()));
}

/// Status tag for one engine result.
#[must_use]
pub fn status_tag(success: bool) -> String {
    if success {
        paint("OK", |s| s.green())
    } else {
        paint("FAIL", |s| s.red())
    }
}
