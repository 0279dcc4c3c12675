//! Rendering contract and default terminal renderer.
//!
//! `RenderSink` is the UI contract consumed by the shell. Replies go to stdout
//! so they can be piped; everything else goes to stderr.

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

const INDENT: &str = "  ";
const PROMPT_PLAIN: &str = "> ";
const PROMPT_SYMBOL: &str = ">";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_SECTION_BULLET: &str = "•";

/// Injectable rendering interface used by the shell.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink without coupling to real output streams.
pub trait RenderSink: Send + Sync {
    /// Render the interactive prompt chrome.
    fn prompt(&self);
    /// Render one assistant reply destined for stdout.
    fn assistant_message(&self, content: &str);
    /// Render a titled section line.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        if self.color {
            eprint!("{} ", PROMPT_SYMBOL.with(Color::Green).bold());
        } else {
            eprint!("{PROMPT_PLAIN}");
        }
        let _ = io::stderr().flush();
    }

    fn assistant_message(&self, content: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{content}");
        let _ = out.flush();
    }

    fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::White).bold()
            );
        } else {
            eprintln!("{GLYPH_SECTION_BULLET} {title}");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White),
            );
        } else {
            eprintln!("{INDENT}{key}: {value}");
        }
    }

    fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{INDENT}{}", text.with(Color::DarkGrey));
        } else {
            eprintln!("{INDENT}{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen() -> io::Result<()> {
    let mut err = io::stderr();
    crossterm::execute!(err, Clear(ClearType::All), MoveTo(0, 0))
}
