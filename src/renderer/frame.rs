//! Frame Module - Painting the visible slice of the page.
//!
//! Output is accumulated into an [`OutputBuffer`] and flushed in one write.
//! A frame is three bands:
//! - Row 0: navigation bar (brand + section links, or the menu toggle when
//!   the terminal is narrower than [`NAV_COLLAPSE_WIDTH`])
//! - Rows 1..h-1: the page slice starting at the scroll offset
//! - Row h-1: status line (active section, position, key hints)
//!
//! The whole frame is wrapped in synchronized output so terminals that
//! support it swap it in without flicker.

use std::io::{self, Write};

use super::ansi;
use super::line::Line;
use super::line::Span;
use super::page::Page;
use crate::state::scroll::BACK_TO_TOP_THRESHOLD;
use crate::state::sections::Section;
use crate::theme::t;
use crate::types::{Attr, Rgba, TextAlign};

/// Width below which the navigation collapses into the menu toggle.
pub const NAV_COLLAPSE_WIDTH: u16 = 80;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
///
/// Instead of many small writes to stdout, we accumulate everything
/// and flush once. This reduces syscall overhead significantly.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(16384) // 16KB default
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get current buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Flush buffer to stdout (blocking).
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(()) // Buffering only - real flush via flush_stdout
    }
}

// =============================================================================
// Chrome
// =============================================================================

/// Everything the nav and status rows need beyond the page itself.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub brand: String,
    pub sections: Vec<Section>,
    pub active: Section,
    pub menu_open: bool,
    pub theme_name: String,
}

// =============================================================================
// Frame painting
// =============================================================================

/// Paint one full frame into `out`. The caller flushes.
pub fn paint_frame(
    out: &mut OutputBuffer,
    page: &Page,
    chrome: &Chrome,
    width: u16,
    height: u16,
    scroll_offset: u16,
) -> io::Result<()> {
    if width == 0 || height < 2 {
        return Ok(());
    }
    let theme = t();
    let page_bg = theme.bg();

    ansi::begin_sync(out)?;

    paint_line(out, &nav_line(chrome, width), 0, width, page_bg)?;

    let content_rows = height - 2;
    let blank = Line::blank();
    for row in 0..content_rows {
        let doc_row = scroll_offset as usize + row as usize;
        let line = page.lines.get(doc_row).unwrap_or(&blank);
        paint_line(out, line, row + 1, width, page_bg)?;
    }

    if chrome.menu_open && width < NAV_COLLAPSE_WIDTH {
        for (i, line) in menu_lines(chrome).into_iter().enumerate() {
            let row = 1 + i as u16;
            if row >= height - 1 {
                break;
            }
            paint_line(out, &line, row, width, page_bg)?;
        }
    }

    let max = page.height().saturating_sub(content_rows as usize);
    paint_line(
        out,
        &status_line(chrome, scroll_offset, max as u16, width),
        height - 1,
        width,
        page_bg,
    )?;

    ansi::reset(out)?;
    ansi::end_sync(out)?;
    Ok(())
}

/// Paint one row: fill with the line background, then emit each span with
/// its own colors. Alignment decides the starting column.
fn paint_line(
    out: &mut OutputBuffer,
    line: &Line,
    row: u16,
    width: u16,
    default_bg: Rgba,
) -> io::Result<()> {
    let line_bg = line.bg.unwrap_or(default_bg);

    ansi::cursor_to(out, 0, row)?;
    ansi::reset(out)?;
    ansi::bg(out, line_bg)?;
    ansi::erase_to_eol(out)?;

    let line_width = line.width();
    let x = match line.align {
        TextAlign::Left => 0,
        TextAlign::Center => width.saturating_sub(line_width) / 2,
        TextAlign::Right => width.saturating_sub(line_width),
    };
    if x > 0 {
        ansi::cursor_to(out, x, row)?;
    }

    for span in &line.spans {
        ansi::reset(out)?;
        ansi::bg(out, span.bg.unwrap_or(line_bg))?;
        ansi::fg(out, span.fg)?;
        if !span.attrs.is_empty() {
            ansi::attrs(out, span.attrs)?;
        }
        match &span.url {
            Some(url) => ansi::link(out, &span.text, url)?,
            None => out.write_str(&span.text),
        }
    }

    Ok(())
}

// =============================================================================
// Chrome rows
// =============================================================================

/// Navigation bar: brand on the left, section links (or the menu toggle).
fn nav_line(chrome: &Chrome, width: u16) -> Line {
    let theme = t();
    let mut line = Line::new().on(theme.surface());
    line = line.push(
        Span::new(format!(" {} ", chrome.brand), theme.primary()).with_attrs(Attr::BOLD),
    );

    if width < NAV_COLLAPSE_WIDTH {
        let toggle = if chrome.menu_open {
            " \u{2715} close (m) "
        } else {
            " \u{2261} menu (m) "
        };
        let used = line.width() + Span::new(toggle, theme.text()).width();
        let spacer = width.saturating_sub(used);
        line = line
            .push(Span::new(" ".repeat(spacer as usize), theme.text()))
            .push(Span::new(toggle, theme.text_muted()));
        return line;
    }

    for section in &chrome.sections {
        let label = format!(" {} ", section.title());
        if line.width() + label.len() as u16 + 1 > width {
            break;
        }
        let span = if *section == chrome.active {
            Span::new(label, theme.primary()).with_attrs(Attr::BOLD | Attr::UNDERLINE)
        } else {
            Span::new(label, theme.text_muted())
        };
        line = line.push(span);
    }
    line
}

/// Menu overlay rows for the collapsed navigation: one section per row.
fn menu_lines(chrome: &Chrome) -> Vec<Line> {
    let theme = t();
    let mut lines = vec![Line::blank().on(theme.overlay())];

    for section in &chrome.sections {
        let marker = if *section == chrome.active { "\u{25b8} " } else { "  " };
        let line = Line::new()
            .on(theme.overlay())
            .push(Span::new(format!("  {}", marker), theme.primary()))
            .push(
                Span::new(format!("[{}] ", section.jump_key()), theme.text_muted()),
            )
            .push(if *section == chrome.active {
                Span::new(section.title(), theme.primary()).with_attrs(Attr::BOLD)
            } else {
                Span::new(section.title(), theme.text())
            });
        lines.push(line);
    }

    lines.push(Line::blank().on(theme.overlay()));
    lines
}

/// Status line: active section and position left, hints right.
fn status_line(chrome: &Chrome, scroll_offset: u16, max: u16, width: u16) -> Line {
    let theme = t();

    let percent = if max == 0 {
        100
    } else {
        (scroll_offset as u32 * 100 / max as u32).min(100)
    };

    let mut line = Line::new().on(theme.surface());
    line = line
        .push(Span::new(format!(" {} ", chrome.active.title()), theme.primary()).with_attrs(Attr::BOLD))
        .push(Span::new(format!("\u{00b7} {:>3}% ", percent), theme.text_muted()));

    let mut hints = String::new();
    if scroll_offset > BACK_TO_TOP_THRESHOLD {
        hints.push_str("g top \u{00b7} ");
    }
    hints.push_str(&format!(
        "{} \u{00b7} j/k scroll \u{00b7} d theme \u{00b7} q quit ",
        chrome.theme_name
    ));

    let right = Span::new(hints, theme.text_muted()).with_attrs(Attr::DIM);
    let used = line.width() + right.width();
    if used <= width {
        let spacer = width - used;
        line = line
            .push(Span::new(" ".repeat(spacer as usize), theme.text()))
            .push(right);
    }
    line
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Profile;
    use crate::renderer::page::build_page;
    use crate::theme::{reset_accessor, reset_theme_state};

    fn setup() -> (Page, Chrome) {
        reset_theme_state();
        reset_accessor();
        let profile = Profile::builtin();
        let page = build_page(&profile, "", false, 100);
        let chrome = Chrome {
            brand: profile.brand.clone(),
            sections: profile.sections(),
            active: Section::Home,
            menu_open: false,
            theme_name: "light".to_string(),
        };
        (page, chrome)
    }

    fn painted(page: &Page, chrome: &Chrome, width: u16, height: u16, scroll: u16) -> String {
        let mut out = OutputBuffer::new();
        paint_frame(&mut out, page, chrome, width, height, scroll).unwrap();
        out.as_str().into_owned()
    }

    #[test]
    fn test_output_buffer_write() {
        let mut buf = OutputBuffer::new();
        buf.write_str("hello");
        buf.write_str(" world");
        assert_eq!(buf.as_str().as_ref(), "hello world");
    }

    #[test]
    fn test_output_buffer_clear() {
        let mut buf = OutputBuffer::new();
        buf.write_str("test");
        assert!(!buf.is_empty());
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_frame_is_synchronized() {
        let (page, chrome) = setup();
        let frame = painted(&page, &chrome, 100, 30, 0);

        assert!(frame.starts_with("\x1b[?2026h"));
        assert!(frame.ends_with("\x1b[?2026l"));
    }

    #[test]
    fn test_nav_shows_brand_and_sections() {
        let (page, chrome) = setup();
        let frame = painted(&page, &chrome, 100, 30, 0);

        assert!(frame.contains(&chrome.brand));
        assert!(frame.contains("About"));
        assert!(frame.contains("Contact"));
    }

    #[test]
    fn test_narrow_nav_collapses() {
        let (page, chrome) = setup();
        let frame = painted(&page, &chrome, 60, 30, 0);

        assert!(frame.contains("menu (m)"));
    }

    #[test]
    fn test_menu_overlay_lists_sections() {
        let (page, mut chrome) = setup();
        chrome.menu_open = true;
        let frame = painted(&page, &chrome, 60, 30, 0);

        assert!(frame.contains("close (m)"));
        for section in &chrome.sections {
            assert!(frame.contains(section.title()), "missing {}", section.title());
        }
        assert!(frame.contains(&format!("[{}]", Section::Contact.jump_key())));
    }

    #[test]
    fn test_wide_terminal_has_no_overlay() {
        let (page, mut chrome) = setup();
        chrome.menu_open = true;
        let frame = painted(&page, &chrome, 120, 30, 0);

        // Menu state is ignored when the full navigation fits
        assert!(!frame.contains("close (m)"));
    }

    #[test]
    fn test_content_follows_scroll() {
        let (page, chrome) = setup();

        // Find a distinctive row further down the page. The section title
        // itself also sits in the nav bar, so skip past it.
        let about = page.anchors.iter().find(|a| a.section == Section::About).unwrap();
        let pos = page
            .lines
            .iter()
            .enumerate()
            .skip(about.top)
            .find(|(_, l)| !l.is_blank() && l.text().trim() != Section::About.title())
            .map(|(i, _)| i)
            .unwrap();
        let target = page.lines[pos].text();

        let at_rest = painted(&page, &chrome, 100, 10, 0);
        let scrolled = painted(&page, &chrome, 100, 10, pos as u16);

        assert!(!at_rest.contains(target.trim()));
        assert!(scrolled.contains(target.trim()));
    }

    #[test]
    fn test_status_shows_position_and_hints() {
        let (page, chrome) = setup();

        let frame = painted(&page, &chrome, 100, 30, 0);
        assert!(frame.contains("  0%"));
        assert!(frame.contains("q quit"));
        assert!(!frame.contains("g top"));

        let frame = painted(&page, &chrome, 100, 30, BACK_TO_TOP_THRESHOLD + 10);
        assert!(frame.contains("g top"));
    }

    #[test]
    fn test_short_page_reads_complete() {
        let (_, chrome) = setup();
        let page = Page::default();

        // Empty page: position pins to 100%, nothing to scroll
        let frame = painted(&page, &chrome, 100, 30, 0);
        assert!(frame.contains("100%"));
    }

    #[test]
    fn test_degenerate_viewport_paints_nothing() {
        let (page, chrome) = setup();
        assert!(painted(&page, &chrome, 0, 30, 0).is_empty());
        assert!(painted(&page, &chrome, 100, 1, 0).is_empty());
    }
}
