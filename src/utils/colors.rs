//! Terminal color helper utilities.

use ansi_term::{Colour, Style};

/// A rendered query clause, highlighted for the terminal.
pub fn clause(s: &str) -> String {
    Colour::Cyan.paint(s).to_string()
}

pub fn dim(s: &str) -> String {
    Style::new().dimmed().paint(s).to_string()
}

pub fn good(s: &str) -> String {
    Colour::Green.paint(s).to_string()
}

pub fn bad(s: &str) -> String {
    Colour::Red.paint(s).to_string()
}
