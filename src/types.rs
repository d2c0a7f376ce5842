//! Core types for devfolio.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive state layer and define what the renderer understands.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Dim the color by a factor (0.0 = black, 1.0 = unchanged).
    #[inline]
    pub fn dim(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return Self::GRAY;
        }
        Self {
            r: (self.r as f32 * factor).clamp(0.0, 255.0) as i16,
            g: (self.g as f32 * factor).clamp(0.0, 255.0) as i16,
            b: (self.b as f32 * factor).clamp(0.0, 255.0) as i16,
            a: self.a,
        }
    }

    /// Calculate relative luminance for WCAG contrast calculations.
    pub fn relative_luminance(&self) -> f32 {
        if self.is_terminal_default() {
            return 0.0; // Assume dark for the terminal's own colors
        }

        fn channel_luminance(c: i16) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel_luminance(self.r)
            + 0.7152 * channel_luminance(self.g)
            + 0.0722 * channel_luminance(self.b)
    }

    /// Calculate WCAG 2.1 contrast ratio between two colors.
    ///
    /// Returns a value between 1.0 and 21.0.
    /// WCAG AA requires 4.5:1 for normal text, 3:1 for large text.
    pub fn contrast_ratio(c1: Self, c2: Self) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }

    // =========================================================================
    // Color Parsing
    // =========================================================================

    /// Create from 0xRRGGBB integer format.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio::types::Rgba;
    ///
    /// let red = Rgba::from_rgb_int(0xff0000);
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio::types::Rgba;
    ///
    /// let red = Rgba::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    ///
    /// // #RGB shorthand (expands each digit)
    /// let white = Rgba::from_hex("#fff").unwrap();
    /// assert_eq!(white, Rgba::rgb(255, 255, 255));
    ///
    /// // Without # prefix also works
    /// let blue = Rgba::from_hex("0000ff").unwrap();
    /// assert_eq!(blue, Rgba::rgb(0, 0, 255));
    ///
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        // Helper to parse a single hex digit
        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        // Helper to parse two hex digits
        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            // #RRGGBB
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            // #RRGGBBAA
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl Rgba {
    /// Test-only complement of `is_terminal_default`, mirroring
    /// `ThemeColor::is_rgb` for resolved colors.
    pub(crate) fn is_rgb(&self) -> bool {
        !self.is_terminal_default()
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

// =============================================================================
// Section Geometry
// =============================================================================

/// Vertical extent of a page section, in viewport-relative rows.
///
/// `top` is negative once the section start has scrolled above the viewport,
/// mirroring how a bounding box behaves relative to a scrolled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub top: i32,
    pub bottom: i32,
}

impl SectionBounds {
    /// Create bounds from top/bottom rows.
    pub const fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    /// Check whether a reference row falls inside these bounds.
    ///
    /// Inclusive on both ends: a section whose bottom edge sits exactly on
    /// the reference row still counts as containing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio::types::SectionBounds;
    ///
    /// let bounds = SectionBounds::new(-50, 600);
    /// assert!(bounds.contains(100));
    /// assert!(bounds.contains(-50));
    /// assert!(bounds.contains(600));
    /// assert!(!bounds.contains(601));
    /// ```
    #[inline]
    pub const fn contains(&self, offset: i32) -> bool {
        self.top <= offset && offset <= self.bottom
    }
}

// =============================================================================
// Text Alignment
// =============================================================================

/// Horizontal text alignment within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border character sets for boxed content (cards, overlays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Single,
    Rounded,
}

impl BorderStyle {
    /// Border characters: (horizontal, vertical, top-left, top-right,
    /// bottom-right, bottom-left).
    pub const fn chars(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            BorderStyle::Single => ("─", "│", "┌", "┐", "┘", "└"),
            BorderStyle::Rounded => ("─", "│", "╭", "╮", "╯", "╰"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
