//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::{OwoColorize, Stream, Style};
use quicklinks_search::{highlight_matches_with, MatchResult, MatchType};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Emphasize matched characters for a terminal
///
/// Falls back to plain text when stdout does not support colors, so piped
/// output stays free of escape codes.
pub fn highlight_terminal(text: &str, indices: Option<&[usize]>) -> String {
    let style = Style::new().yellow().bold();
    highlight_matches_with(text, indices, |c| {
        c.if_supports_color(Stream::Stdout, |c| c.style(style)).to_string()
    })
}

/// Short label describing how a result matched
pub fn match_label(result: &MatchResult) -> String {
    match result.match_type {
        MatchType::Key => "key".to_string(),
        MatchType::Aliases => "alias".to_string(),
        MatchType::Description => "description".to_string(),
        MatchType::Similar => match result.distance {
            Some(distance) => format!("similar, {}", format_count(distance, "edit", "edits")),
            None => "similar".to_string(),
        },
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
