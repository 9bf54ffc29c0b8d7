//! Presentation adapters.
//!
//! A [`Styler`] maps semantic span categories to concrete text. The
//! ANSI adapter uses a small 24-bit palette; the plain adapter passes
//! content through untouched so non-terminal consumers (files, pipes,
//! test captures) get clean text.

use crate::span::{Category, Line, Span};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_UNDERLINE: &str = "\x1b[4m";

/// A color in RGB format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// Create a color from a hex value (0xRRGGBB).
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Convert to ANSI 24-bit foreground escape code.
    #[must_use]
    pub fn to_ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Colors for the semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Positive/configured values (green).
    pub positive: Color,
    /// The "none" sentinel (red).
    pub negative: Color,
    /// Descriptions (orange).
    pub warning: Color,
    /// Path placeholders (gray).
    pub muted: Color,
    /// Connection titles (cyan, underlined).
    pub title: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: Color::from_hex(0x4CAF50), // Green
            negative: Color::from_hex(0xF44336), // Red
            warning: Color::from_hex(0xFF9800),  // Orange
            muted: Color::from_hex(0x757575),    // Gray 600
            title: Color::from_hex(0x00BCD4),    // Cyan
        }
    }
}

/// Maps tagged spans to output text.
pub trait Styler {
    /// Style one span.
    fn styled(&self, span: &Span) -> String;

    /// Render lines to a text block, one newline-terminated line each.
    fn render(&self, lines: &[Line]) -> String {
        let mut out = String::new();
        for line in lines {
            for span in &line.spans {
                out.push_str(&self.styled(span));
            }
            out.push('\n');
        }
        out
    }
}

/// Passthrough styler for non-terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn styled(&self, span: &Span) -> String {
        span.text.clone()
    }
}

/// 24-bit ANSI styler for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler {
    palette: Palette,
}

impl AnsiStyler {
    /// Create a styler with a custom palette.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Styler for AnsiStyler {
    fn styled(&self, span: &Span) -> String {
        if span.text.is_empty() {
            return String::new();
        }
        match span.category {
            Category::Plain => span.text.clone(),
            Category::Positive => {
                format!("{}{}{ANSI_RESET}", self.palette.positive.to_ansi_fg(), span.text)
            }
            Category::Negative => {
                format!("{}{}{ANSI_RESET}", self.palette.negative.to_ansi_fg(), span.text)
            }
            Category::Warning => {
                format!("{}{}{ANSI_RESET}", self.palette.warning.to_ansi_fg(), span.text)
            }
            Category::Muted => {
                format!("{}{}{ANSI_RESET}", self.palette.muted.to_ansi_fg(), span.text)
            }
            Category::Title => format!(
                "{}{ANSI_UNDERLINE}{}{ANSI_RESET}",
                self.palette.title.to_ansi_fg(),
                span.text
            ),
        }
    }
}

/// Pick a styler for the current process.
///
/// ANSI when stdout is a terminal, plain otherwise. `NO_COLOR` and
/// `TERM=dumb` force plain output even on a terminal.
#[must_use]
pub fn auto_styler() -> Box<dyn Styler + Send + Sync> {
    use crossterm::tty::IsTty;

    let plain = !std::io::stdout().is_tty()
        || std::env::var_os("NO_COLOR").is_some()
        || std::env::var("TERM").is_ok_and(|t| t == "dumb");
    if plain {
        Box::new(PlainStyler)
    } else {
        Box::new(AnsiStyler::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styler_passes_text_through() {
        let span = Span::new("GET", Category::Positive);
        assert_eq!(PlainStyler.styled(&span), "GET");
    }

    #[test]
    fn ansi_styler_wraps_categories_in_escape_codes() {
        let styler = AnsiStyler::default();
        let styled = styler.styled(&Span::new("none", Category::Negative));

        assert!(styled.starts_with("\x1b[38;2;"));
        assert!(styled.ends_with(ANSI_RESET));
        assert!(styled.contains("none"));
    }

    #[test]
    fn title_is_underlined() {
        let styler = AnsiStyler::default();
        let styled = styler.styled(&Span::new("http://localhost:8000", Category::Title));

        assert!(styled.contains(ANSI_UNDERLINE));
    }

    #[test]
    fn plain_spans_carry_no_codes() {
        let styler = AnsiStyler::default();
        assert_eq!(styler.styled(&Span::plain("   ")), "   ");
    }

    #[test]
    fn empty_spans_emit_nothing() {
        let styler = AnsiStyler::default();
        assert_eq!(styler.styled(&Span::new("", Category::Warning)), "");
    }

    #[test]
    fn render_terminates_every_line() {
        let lines = vec![
            [Span::plain("a")].into_iter().collect::<Line>(),
            [Span::plain("b")].into_iter().collect::<Line>(),
        ];

        assert_eq!(PlainStyler.render(&lines), "a\nb\n");
    }
}
