//! Toggle State Module - Dark mode and navigation menu
//!
//! Two independent boolean signals:
//! - Dark mode: starts light, optionally seeded once from the terminal's
//!   reported background color, flipped freely afterwards
//! - Menu: the collapsed navigation overlay on narrow terminals
//!
//! Toggling one never touches the other.
//!
//! # Example
//!
//! ```ignore
//! use devfolio::state::toggles;
//!
//! toggles::init_dark_mode_from_env();
//! toggles::toggle_dark_mode();
//! assert!(toggles::dark_mode() || !toggles::dark_mode());
//! ```

use std::cell::Cell;

use spark_signals::{signal, Signal};

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static DARK_MODE: Signal<bool> = signal(false);
    static MENU_OPEN: Signal<bool> = signal(false);
    static DARK_MODE_SEEDED: Cell<bool> = const { Cell::new(false) };
}

// =============================================================================
// DARK MODE
// =============================================================================

/// Whether dark mode is active.
pub fn dark_mode() -> bool {
    DARK_MODE.with(|s| s.get())
}

/// The dark mode signal, for use inside effects.
pub fn dark_mode_signal() -> Signal<bool> {
    DARK_MODE.with(|s| s.clone())
}

/// Set dark mode explicitly.
pub fn set_dark_mode(enabled: bool) {
    DARK_MODE.with(|s| s.set(enabled));
}

/// Flip dark mode. Returns the new value.
pub fn toggle_dark_mode() -> bool {
    DARK_MODE.with(|s| {
        let next = !s.get();
        s.set(next);
        next
    })
}

/// Read a dark-background preference from a `COLORFGBG`-style value
/// (`"fg;bg"`, some terminals insert a default field: `"fg;default;bg"`).
///
/// Returns `None` when the value is absent or unparseable, so the caller
/// keeps its default.
pub fn detect_dark_preference(colorfgbg: Option<&str>) -> Option<bool> {
    let value = colorfgbg?;
    let bg = value.rsplit(';').next()?.trim();
    let code: u8 = bg.parse().ok()?;
    match code {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

/// Seed dark mode from the `COLORFGBG` environment variable, once.
///
/// Later calls are no-ops, so a user toggle is never clobbered. Terminals
/// that don't set the variable leave the default in place.
pub fn init_dark_mode_from_env() {
    let already = DARK_MODE_SEEDED.with(|c| c.replace(true));
    if already {
        return;
    }
    let value = std::env::var("COLORFGBG").ok();
    if let Some(dark) = detect_dark_preference(value.as_deref()) {
        set_dark_mode(dark);
    }
}

// =============================================================================
// MENU
// =============================================================================

/// Whether the navigation menu overlay is open.
pub fn is_menu_open() -> bool {
    MENU_OPEN.with(|s| s.get())
}

/// The menu signal, for use inside effects.
pub fn menu_signal() -> Signal<bool> {
    MENU_OPEN.with(|s| s.clone())
}

/// Flip the menu. Returns the new value.
pub fn toggle_menu() -> bool {
    MENU_OPEN.with(|s| {
        let next = !s.get();
        s.set(next);
        next
    })
}

/// Close the menu if it is open.
pub fn close_menu() {
    MENU_OPEN.with(|s| {
        if s.get() {
            s.set(false);
        }
    });
}

/// Reset toggle state (for testing)
pub fn reset_toggle_state() {
    DARK_MODE.with(|s| s.set(false));
    MENU_OPEN.with(|s| s.set(false));
    DARK_MODE_SEEDED.with(|c| c.set(false));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_toggle_state();
    }

    #[test]
    fn test_defaults() {
        setup();
        assert!(!dark_mode());
        assert!(!is_menu_open());
    }

    #[test]
    fn test_toggles_are_independent() {
        setup();

        toggle_dark_mode();
        assert!(dark_mode());
        assert!(!is_menu_open());

        toggle_menu();
        assert!(dark_mode());
        assert!(is_menu_open());

        toggle_dark_mode();
        assert!(!dark_mode());
        assert!(is_menu_open()); // Untouched
    }

    #[test]
    fn test_toggle_returns_new_value() {
        setup();
        assert!(toggle_dark_mode());
        assert!(!toggle_dark_mode());
        assert!(toggle_menu());
        assert!(!toggle_menu());
    }

    #[test]
    fn test_close_menu() {
        setup();

        close_menu(); // Already closed
        assert!(!is_menu_open());

        toggle_menu();
        close_menu();
        assert!(!is_menu_open());
    }

    #[test]
    fn test_detect_dark_preference() {
        // Dark backgrounds
        assert_eq!(detect_dark_preference(Some("15;0")), Some(true));
        assert_eq!(detect_dark_preference(Some("7;4")), Some(true));
        assert_eq!(detect_dark_preference(Some("15;8")), Some(true));

        // Light backgrounds
        assert_eq!(detect_dark_preference(Some("0;15")), Some(false));
        assert_eq!(detect_dark_preference(Some("0;7")), Some(false));

        // Three-field form
        assert_eq!(detect_dark_preference(Some("15;default;0")), Some(true));

        // Unparseable
        assert_eq!(detect_dark_preference(Some("")), None);
        assert_eq!(detect_dark_preference(Some("garbage")), None);
        assert_eq!(detect_dark_preference(Some("15;99")), None);
        assert_eq!(detect_dark_preference(None), None);
    }

    #[test]
    fn test_dark_preference_applies_before_any_toggle() {
        setup();

        // A terminal reporting a dark background seeds dark mode directly
        if let Some(dark) = detect_dark_preference(Some("15;0")) {
            set_dark_mode(dark);
        }
        assert!(dark_mode());
    }

    #[test]
    fn test_seed_runs_once() {
        setup();

        init_dark_mode_from_env();
        // Whatever the environment said, a user choice afterwards sticks
        set_dark_mode(true);
        init_dark_mode_from_env();
        assert!(dark_mode());
    }

    #[test]
    fn test_missing_env_keeps_default() {
        setup();

        // Simulates the defensive path: no preference, default untouched
        if let Some(dark) = detect_dark_preference(None) {
            set_dark_mode(dark);
        }
        assert!(!dark_mode());
    }
}
