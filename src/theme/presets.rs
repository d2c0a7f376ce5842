//! Theme presets for devfolio.
//!
//! Two palettes, one per mode:
//! - light: blue brand on near-white, the page's default
//! - dark: softened blue on near-black
//!
//! Both keep body text, muted text, and the brand color at or above the
//! 4.5:1 contrast ratio against the page background.

use super::{Theme, ThemeColor};
use crate::types::Rgba;

// =============================================================================
// Light Theme (Default)
// =============================================================================

/// Light theme - blue brand color on a near-white page.
pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        // Brand
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x2563eb)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x1d4ed8)),
        // Text
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0x111827)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x4b5563)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0x030712)),
        // Background
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0xf9fafb)),
        background_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0xf3f4f6)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        overlay: ThemeColor::Rgb(Rgba::from_rgb_int(0xe5e7eb)),
        // Border
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0xd1d5db)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x2563eb)),
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Dark theme - the same layout with a softened blue on near-black.
pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        // Brand
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x60a5fa)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x93c5fd)),
        // Text
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xd1d5db)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x9ca3af)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0xf9fafb)),
        // Background
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x111827)),
        background_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x1f2937)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0x1f2937)),
        overlay: ThemeColor::Rgb(Rgba::from_rgb_int(0x030712)),
        // Border
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x374151)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x60a5fa)),
    }
}

/// The palette for a dark-mode flag.
pub fn theme_for(dark_mode: bool) -> Theme {
    if dark_mode { dark() } else { light() }
}

// =============================================================================
// Tests
// =============================================================================
