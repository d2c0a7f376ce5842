//! Text measurement for terminal rendering.
//!
//! Unicode-aware width calculation, word-break wrapping, and grapheme-safe
//! truncation. Widths are terminal cells, not bytes:
//!
//! - ASCII printable: 1 cell
//! - CJK and most emoji: 2 cells
//! - ZWJ emoji sequences: 2 cells (measured as one cluster)
//! - Zero-width characters: 0 cells
//!
//! Built on `unicode-width` (East Asian Width tables) and
//! `unicode-segmentation` (UAX #29 grapheme cluster boundaries).

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Zero-width joiner, the glue inside composite emoji.
const ZWJ: char = '\u{200D}';
/// Variation selector-16 forces emoji presentation (width 2).
const VS16: char = '\u{FE0F}';

/// Measure the display width of a single grapheme cluster.
///
/// Summing per-char widths overcounts ZWJ sequences (a family emoji would
/// measure 8), so clusters joined with ZWJ or carrying VS16 are pinned to 2.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.contains(ZWJ) || grapheme.contains(VS16) {
        return 2;
    }
    UnicodeWidthStr::width(grapheme)
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Word-wrap text to a maximum display width.
///
/// Greedy fill: words are packed onto a line until the next one would
/// overflow. A single word wider than `max_width` is hard-split at grapheme
/// boundaries. Explicit newlines are respected. Never returns an empty vec;
/// empty input yields one empty line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        wrap_line(raw_line, max_width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_line(line: &str, max_width: usize, out: &mut Vec<String>) {
    if line.trim().is_empty() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_whitespace() {
        let word_width = string_width(word);

        // Word alone exceeds the line: flush and hard-split it.
        if word_width > max_width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            hard_split(word, max_width, out, &mut current, &mut current_width);
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > max_width {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

/// Split an overlong word at grapheme boundaries. The final partial chunk is
/// left in `current` so following words can share its line.
fn hard_split(
    word: &str,
    max_width: usize,
    out: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for grapheme in word.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if *current_width + gw > max_width && !current.is_empty() {
            out.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push_str(grapheme);
        *current_width += gw;
    }
}

/// Truncate text to fit within `max_width` terminal cells.
///
/// If the text is wider than `max_width`, it is truncated at a grapheme
/// boundary and `suffix` is appended. The suffix width is accounted for.
/// Returns the original text (owned) if it fits.
pub fn truncate_text(text: &str, max_width: usize, suffix: &str) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = string_width(text);
    if text_width <= max_width {
        return text.to_string();
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_width {
        // Suffix alone exceeds max_width - truncate the suffix itself.
        return truncate_exact(suffix, max_width);
    }

    let target_width = max_width - suffix_width;
    let mut result = String::with_capacity(text.len());
    let mut current_width: usize = 0;

    for grapheme in text.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if current_width + gw > target_width {
            break;
        }
        result.push_str(grapheme);
        current_width += gw;
    }

    result.push_str(suffix);
    result
}

/// Truncate text to exactly `max_width` cells with no suffix.
fn truncate_exact(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width: usize = 0;

    for grapheme in text.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if current_width + gw > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += gw;
    }

    result
}

/// Right-pad text with spaces to the given display width.
///
/// Text already at or beyond the width is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = string_width(text);
    if w >= width {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len() + (width - w));
    result.push_str(text);
    for _ in 0..(width - w) {
        result.push(' ');
    }
    result
}

/// Left-pad text with spaces so it appears centered in the given width.
///
/// Only the leading pad is emitted; trailing cells are left for the caller
/// (the frame painter clears to end of line anyway).
pub fn center_in_width(text: &str, width: usize) -> String {
    let w = string_width(text);
    if w >= width {
        return text.to_string();
    }
    let pad = (width - w) / 2;
    let mut result = String::with_capacity(text.len() + pad);
    for _ in 0..pad {
        result.push(' ');
    }
    result.push_str(text);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn width_cjk() {
        // "你好" = two fullwidth characters = 4 cells
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("a你b"), 4);
    }

    #[test]
    fn width_zwj_sequence() {
        // Family emoji joined with ZWJ measures as one 2-cell cluster
        assert_eq!(string_width("👨\u{200D}👩\u{200D}👧"), 2);
    }

    #[test]
    fn width_combining_accent() {
        // e + combining acute = one cluster, 1 cell
        assert_eq!(string_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn wrap_simple() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_exact_fit() {
        let lines = wrap_text("aaa bbb", 7);
        assert_eq!(lines, vec!["aaa bbb"]);
    }

    #[test]
    fn wrap_long_word_hard_split() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_respects_newlines() {
        let lines = wrap_text("one\ntwo", 20);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn wrap_empty_input() {
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("", 0), vec![""]);
    }

    #[test]
    fn wrap_never_splits_grapheme() {
        // Each fullwidth char is 2 cells; width 3 fits only one per line
        let lines = wrap_text("你好", 3);
        for line in &lines {
            assert!(string_width(line) <= 3);
        }
        assert_eq!(lines.concat(), "你好");
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_text("hello", 10, "…"), "hello");
    }

    #[test]
    fn truncate_with_ellipsis() {
        assert_eq!(truncate_text("hello world", 6, "…"), "hello…");
    }

    #[test]
    fn truncate_cjk_boundary() {
        // Target width 3 - "你" (2) fits, "好" (2) doesn't -> "你" + "…"
        assert_eq!(truncate_text("你好世界", 4, "…"), "你…");
    }

    #[test]
    fn truncate_zero_width() {
        assert_eq!(truncate_text("hello", 0, "…"), "");
    }

    #[test]
    fn pad_and_center() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
        assert_eq!(center_in_width("ab", 6), "  ab");
        assert_eq!(center_in_width("ab", 2), "ab");
    }
}
