//! Line Module - Styled rows of the page document.
//!
//! The page is a flat list of [`Line`]s; each line is a list of [`Span`]s
//! sharing a background and an alignment. Section builders produce lines,
//! the frame painter turns them into escape sequences.
//!
//! # Example
//!
//! ```ignore
//! use devfolio::renderer::{Line, Span};
//! use devfolio::types::{Attr, Rgba, TextAlign};
//!
//! let line = Line::new()
//!     .push(Span::new("João ", Rgba::rgb(17, 24, 39)))
//!     .push(Span::new("Silva", Rgba::rgb(37, 99, 235)).with_attrs(Attr::BOLD))
//!     .aligned(TextAlign::Center);
//! assert_eq!(line.text(), "João Silva");
//! ```

use crate::text;
use crate::types::{Attr, Rgba, TextAlign};

// =============================================================================
// Span
// =============================================================================

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub fg: Rgba,
    /// Overrides the line background when set (badge pills).
    pub bg: Option<Rgba>,
    pub attrs: Attr,
    /// Wraps the span in an OSC 8 hyperlink when set.
    pub url: Option<String>,
}

impl Span {
    /// Create a span with a foreground color and no other styling.
    pub fn new(text: impl Into<String>, fg: Rgba) -> Self {
        Self {
            text: text.into(),
            fg,
            bg: None,
            attrs: Attr::NONE,
            url: None,
        }
    }

    /// Add text attributes.
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    /// Give the span its own background.
    pub fn on(mut self, bg: Rgba) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Make the span a hyperlink.
    pub fn linked(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> u16 {
        text::string_width(&self.text) as u16
    }
}

// =============================================================================
// Line
// =============================================================================

/// One row of the document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
    /// Fills the whole row when set; otherwise the page background shows.
    pub bg: Option<Rgba>,
    pub align: TextAlign,
}

impl Line {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// A line with no content (spacing).
    pub fn blank() -> Self {
        Self::default()
    }

    /// A line holding a single span.
    pub fn from_span(span: Span) -> Self {
        Self {
            spans: vec![span],
            ..Self::default()
        }
    }

    /// Append a span.
    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Set the alignment.
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the row background.
    pub fn on(mut self, bg: Rgba) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Total display width of all spans.
    pub fn width(&self) -> u16 {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text of all spans (for tests and measurement).
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether the line has no visible content.
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_builder() {
        let span = Span::new("link", Rgba::rgb(37, 99, 235))
            .with_attrs(Attr::UNDERLINE)
            .linked("https://example.com");

        assert_eq!(span.text, "link");
        assert_eq!(span.attrs, Attr::UNDERLINE);
        assert_eq!(span.url.as_deref(), Some("https://example.com"));
        assert!(span.bg.is_none());
    }

    #[test]
    fn test_span_width_wide_chars() {
        assert_eq!(Span::new("abc", Rgba::BLACK).width(), 3);
        assert_eq!(Span::new("日本", Rgba::BLACK).width(), 4);
    }

    #[test]
    fn test_line_push_and_text() {
        let line = Line::new()
            .push(Span::new("Hello ", Rgba::BLACK))
            .push(Span::new("World", Rgba::BLACK));

        assert_eq!(line.text(), "Hello World");
        assert_eq!(line.width(), 11);
    }

    #[test]
    fn test_line_blank() {
        assert!(Line::blank().is_blank());
        assert!(Line::from_span(Span::new("   ", Rgba::BLACK)).is_blank());
        assert!(!Line::from_span(Span::new("x", Rgba::BLACK)).is_blank());
    }

    #[test]
    fn test_line_defaults() {
        let line = Line::new();
        assert_eq!(line.align, TextAlign::Left);
        assert!(line.bg.is_none());
        assert_eq!(line.width(), 0);
    }

    #[test]
    fn test_line_background() {
        let bg = Rgba::rgb(243, 244, 246);
        let line = Line::blank().on(bg);
        assert_eq!(line.bg, Some(bg));
    }
}
