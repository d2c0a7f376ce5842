//! Theme System for devfolio.
//!
//! The page ships one light and one dark palette; the dark-mode toggle picks
//! between them at runtime. Every slot is a signal, so painters that read a
//! color re-run when the palette swaps.
//!
//! # Color Types
//!
//! - `ThemeColor::Default` - Uses terminal's default color
//! - `ThemeColor::Rgb(rgba)` - Explicit RGB color
//! - `ThemeColor::Str(s)` - Hex string to be parsed
//!
//! # Example
//!
//! ```ignore
//! use devfolio::theme::{t, set_theme, theme_for};
//!
//! set_theme(&theme_for(true)); // dark palette
//! let primary = t().primary(); // Rgba
//! ```

use crate::types::Rgba;

pub mod accessor;
pub mod presets;

pub use accessor::{current_theme_name, t, reset_accessor, reset_theme_state, set_theme, ThemeAccessor};
pub use presets::{dark, light, theme_for};

// =============================================================================
// ThemeColor - A color that can be default, RGB, or a hex string
// =============================================================================

/// Theme color can be:
/// - `Default`: Terminal's default color
/// - `Rgb(rgba)`: Explicit RGB color
/// - `Str(s)`: Hex string to be parsed (`"#RGB"`, `"#RRGGBB"`, `"#RRGGBBAA"`)
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeColor {
    /// Use terminal's default color.
    Default,
    /// Explicit RGB color.
    Rgb(Rgba),
    /// Hex string to be parsed.
    Str(String),
}

impl ThemeColor {
    /// Resolve to Rgba. Parses string if needed.
    ///
    /// - `Default` returns `Rgba::TERMINAL_DEFAULT`
    /// - `Rgb(c)` returns the color directly
    /// - `Str(s)` parses the string, returning magenta on parse failure
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Rgb(c) => *c,
            Self::Str(s) => Rgba::from_hex(s).unwrap_or(Rgba::MAGENTA),
        }
    }

    /// Check if this is the terminal default.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Check if this is an RGB color.
    pub fn is_rgb(&self) -> bool {
        matches!(self, Self::Rgb(_))
    }
}

// =============================================================================
// From implementations for ergonomic construction
// =============================================================================

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

/// `()` means terminal default.
impl From<()> for ThemeColor {
    fn from(_: ()) -> Self {
        Self::Default
    }
}

/// `Rgba` is an RGB color.
impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

/// `&str` is a string to parse.
impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// `String` is a string to parse.
impl From<String> for ThemeColor {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// Theme - All semantic colors
// =============================================================================

/// Theme definition with all semantic colors.
///
/// Contains 11 color slots organized into categories:
/// - Brand: primary, accent
/// - Text: text, text_muted, text_bright
/// - Background: background, background_muted, surface, overlay
/// - Border: border, border_focus
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name ("light" or "dark").
    pub name: String,

    /// Primary brand color: headings, links, active navigation, skill bars.
    pub primary: ThemeColor,
    /// Accent for badges and hints.
    pub accent: ThemeColor,

    /// Primary text color.
    pub text: ThemeColor,
    /// Muted/secondary text (leads, metadata).
    pub text_muted: ThemeColor,
    /// Bright/emphasized text (the hero name, card titles).
    pub text_bright: ThemeColor,

    /// Primary page background.
    pub background: ThemeColor,
    /// Alternate background for banded sections.
    pub background_muted: ThemeColor,
    /// Surface (cards, the navigation bar).
    pub surface: ThemeColor,
    /// Overlay (the collapsed menu).
    pub overlay: ThemeColor,

    /// Default border color.
    pub border: ThemeColor,
    /// Active/selected border color.
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        presets::light()
    }
}

impl Theme {
    /// Create a new theme with all default colors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary: ThemeColor::Default,
            accent: ThemeColor::Default,
            text: ThemeColor::Default,
            text_muted: ThemeColor::Default,
            text_bright: ThemeColor::Default,
            background: ThemeColor::Default,
            background_muted: ThemeColor::Default,
            surface: ThemeColor::Default,
            overlay: ThemeColor::Default,
            border: ThemeColor::Default,
            border_focus: ThemeColor::Default,
        }
    }

    /// Override the brand color with a profile's accent, when present.
    /// An unparseable accent resolves to magenta downstream, which is
    /// loud enough to notice.
    pub fn with_accent(mut self, accent: Option<&str>) -> Self {
        if let Some(accent) = accent {
            self.primary = ThemeColor::Str(accent.to_string());
            self.border_focus = ThemeColor::Str(accent.to_string());
        }
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
