//! # devfolio
//!
//! A single-page developer portfolio for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! The page is a plain document of styled lines; the terminal is a viewport
//! over it. All interactive state lives in signals, and one render effect
//! repaints whenever a tracked value moves:
//! ```text
//! Profile → section builders → Page (lines + anchors) → render effect → terminal
//! ```
//!
//! Scrolling feeds the section tracker, which keeps the nav highlight on
//! the section under the reference row. The hero line is revealed by a
//! typewriter timer pumped from the event loop.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, SectionBounds, etc.)
//! - [`content`] - Profile model, TOML loading, the built-in sample
//! - [`state`] - Reactive state (typewriter, sections, scroll, toggles)
//! - [`theme`] - Light/dark palettes behind a reactive accessor
//! - [`renderer`] - Line builders, page assembly, ANSI frame painting
//! - [`app`] - Terminal lifecycle and the event loop

pub mod app;
pub mod cli;
pub mod content;
pub mod logger;
pub mod renderer;
pub mod state;
pub mod text;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use content::{Profile, ProfileError};

pub use text::{
    center_in_width, grapheme_width, pad_to_width, string_width, truncate_text, wrap_text,
};

pub use renderer::{build_page, paint_frame, Anchor, Chrome, Line, OutputBuffer, Page, Span};

pub use state::{
    // Typewriter
    start_reveal, restart_reveal, cancel_reveal, revealed_text, revealed_count,
    reveal_signal, is_reveal_complete, is_reveal_running, reset_typewriter_state,
    Reveal, RevealId,
    // Sections
    active_section, set_active_section, update_active_section, evaluate,
    reset_section_state, Section, REFERENCE_OFFSET,
    // Scroll
    scroll_offset, set_scroll_offset, scroll_by, scroll_page, scroll_to_top,
    scroll_to_bottom, max_scroll, show_back_to_top, on_scroll, reset_scroll_state,
    // Toggles
    dark_mode, set_dark_mode, toggle_dark_mode, detect_dark_preference,
    init_dark_mode_from_env, is_menu_open, toggle_menu, close_menu,
    reset_toggle_state,
};

pub use theme::{
    // Types
    Theme, ThemeColor, ThemeAccessor,
    // Presets
    dark, light, theme_for,
    // Reactive state
    t, current_theme_name, set_theme, reset_theme_state, reset_accessor,
};

pub use app::{mount, run, tick, AppHandle, AppOptions};
