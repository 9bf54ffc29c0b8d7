//! Tagged text spans.
//!
//! A rendered line is a sequence of spans, each carrying the semantic
//! category the styling adapter should apply. Widths are display widths
//! of the span text (see `unicode-width`), never the width of any
//! escape codes a styler may add later.

use unicode_width::UnicodeWidthStr;

/// Semantic category of a span.
///
/// The renderer decides WHICH category applies; what a category looks
/// like (a color, an underline, nothing at all) is up to the
/// [`Styler`](crate::Styler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Unstyled text, including padding.
    Plain,
    /// Something is configured / active (methods, concrete auth).
    Positive,
    /// Nothing is configured (the "none" sentinel).
    Negative,
    /// Neutral highlight (descriptions).
    Warning,
    /// De-emphasized text (path parameter placeholders).
    Muted,
    /// Connection title (emphasized + informational).
    Title,
}

/// A run of text with one semantic category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The literal content.
    pub text: String,
    /// How the content should be presented.
    pub category: Category,
}

impl Span {
    /// Create a span.
    #[must_use]
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Create an unstyled span.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Category::Plain)
    }

    /// Display width of the content.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// One line of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Spans in display order.
    pub spans: Vec<Span>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Total display width of the line's content.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The line's content with all categories dropped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl FromIterator<Span> for Line {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}
