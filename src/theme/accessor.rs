//! Theme accessor for reactive color access.
//!
//! The t.* pattern provides ergonomic access to theme colors.
//! Each color accessor reads from the specific color's Signal and resolves to
//! Rgba, enabling fine-grained reactivity - only reading from ONE signal per
//! color. `set_theme` writes only the slots that actually changed, so swapping
//! palettes never wakes effects on slots both palettes share.

use std::cell::RefCell;

use spark_signals::{signal, Signal};

use super::{presets, Theme, ThemeColor};
use crate::types::Rgba;

// =============================================================================
// Theme signals - one Signal per color slot
// =============================================================================

struct ThemeSignals {
    name: Signal<String>,
    primary: Signal<ThemeColor>,
    accent: Signal<ThemeColor>,
    text: Signal<ThemeColor>,
    text_muted: Signal<ThemeColor>,
    text_bright: Signal<ThemeColor>,
    background: Signal<ThemeColor>,
    background_muted: Signal<ThemeColor>,
    surface: Signal<ThemeColor>,
    overlay: Signal<ThemeColor>,
    border: Signal<ThemeColor>,
    border_focus: Signal<ThemeColor>,
}

impl ThemeSignals {
    fn new(theme: &Theme) -> Self {
        Self {
            name: signal(theme.name.clone()),
            primary: signal(theme.primary.clone()),
            accent: signal(theme.accent.clone()),
            text: signal(theme.text.clone()),
            text_muted: signal(theme.text_muted.clone()),
            text_bright: signal(theme.text_bright.clone()),
            background: signal(theme.background.clone()),
            background_muted: signal(theme.background_muted.clone()),
            surface: signal(theme.surface.clone()),
            overlay: signal(theme.overlay.clone()),
            border: signal(theme.border.clone()),
            border_focus: signal(theme.border_focus.clone()),
        }
    }

    /// Write each slot that differs from the current value.
    fn apply(&self, theme: &Theme) {
        fn write(sig: &Signal<ThemeColor>, value: &ThemeColor) {
            if sig.get() != *value {
                sig.set(value.clone());
            }
        }

        if self.name.get() != theme.name {
            self.name.set(theme.name.clone());
        }
        write(&self.primary, &theme.primary);
        write(&self.accent, &theme.accent);
        write(&self.text, &theme.text);
        write(&self.text_muted, &theme.text_muted);
        write(&self.text_bright, &theme.text_bright);
        write(&self.background, &theme.background);
        write(&self.background_muted, &theme.background_muted);
        write(&self.surface, &theme.surface);
        write(&self.overlay, &theme.overlay);
        write(&self.border, &theme.border);
        write(&self.border_focus, &theme.border_focus);
    }
}

thread_local! {
    static THEME_SIGNALS: ThemeSignals = ThemeSignals::new(&presets::light());

    /// Cached accessor - created once per thread, reused.
    static ACCESSOR: RefCell<Option<ThemeAccessor>> = const { RefCell::new(None) };
}

/// Swap the active palette. Effects reading changed slots re-run.
pub fn set_theme(theme: &Theme) {
    THEME_SIGNALS.with(|signals| signals.apply(theme));
}

/// Name of the active palette ("light" or "dark").
pub fn current_theme_name() -> String {
    THEME_SIGNALS.with(|signals| signals.name.get())
}

/// Reset to the light palette (for testing)
pub fn reset_theme_state() {
    set_theme(&presets::light());
}

// =============================================================================
// ThemeAccessor
// =============================================================================

/// Accessor for reactive theme colors.
///
/// Each field is a Signal<ThemeColor> shared with the active palette.
/// To get the resolved Rgba, call the slot method; to derive from a slot,
/// take its `_signal` twin.
///
/// # Example
/// ```ignore
/// use devfolio::theme::t;
///
/// let theme = t();
/// let primary_color = theme.primary(); // Rgba
///
/// let primary_signal = theme.primary_signal();
/// let color = primary_signal.get().resolve();
/// ```
#[derive(Clone)]
pub struct ThemeAccessor {
    primary_sig: Signal<ThemeColor>,
    accent_sig: Signal<ThemeColor>,
    text_sig: Signal<ThemeColor>,
    text_muted_sig: Signal<ThemeColor>,
    text_bright_sig: Signal<ThemeColor>,
    background_sig: Signal<ThemeColor>,
    background_muted_sig: Signal<ThemeColor>,
    surface_sig: Signal<ThemeColor>,
    overlay_sig: Signal<ThemeColor>,
    border_sig: Signal<ThemeColor>,
    border_focus_sig: Signal<ThemeColor>,
}

impl ThemeAccessor {
    /// Create a new accessor sharing the active palette's signals.
    pub fn new() -> Self {
        THEME_SIGNALS.with(|signals| Self {
            primary_sig: signals.primary.clone(),
            accent_sig: signals.accent.clone(),
            text_sig: signals.text.clone(),
            text_muted_sig: signals.text_muted.clone(),
            text_bright_sig: signals.text_bright.clone(),
            background_sig: signals.background.clone(),
            background_muted_sig: signals.background_muted.clone(),
            surface_sig: signals.surface.clone(),
            overlay_sig: signals.overlay.clone(),
            border_sig: signals.border.clone(),
            border_focus_sig: signals.border_focus.clone(),
        })
    }

    // =========================================================================
    // Color accessor methods - read and resolve in one call
    // =========================================================================

    /// Get primary color as Rgba. Tracks only the primary signal.
    #[inline]
    pub fn primary(&self) -> Rgba {
        self.primary_sig.get().resolve()
    }

    /// Get accent color as Rgba. Tracks only the accent signal.
    #[inline]
    pub fn accent(&self) -> Rgba {
        self.accent_sig.get().resolve()
    }

    /// Get text color as Rgba. Tracks only the text signal.
    #[inline]
    pub fn text(&self) -> Rgba {
        self.text_sig.get().resolve()
    }

    /// Get text_muted color as Rgba. Tracks only the text_muted signal.
    #[inline]
    pub fn text_muted(&self) -> Rgba {
        self.text_muted_sig.get().resolve()
    }

    /// Get text_bright color as Rgba. Tracks only the text_bright signal.
    #[inline]
    pub fn text_bright(&self) -> Rgba {
        self.text_bright_sig.get().resolve()
    }

    /// Get background color as Rgba. Tracks only the background signal.
    #[inline]
    pub fn bg(&self) -> Rgba {
        self.background_sig.get().resolve()
    }

    /// Get background_muted color as Rgba. Tracks only the background_muted signal.
    #[inline]
    pub fn bg_muted(&self) -> Rgba {
        self.background_muted_sig.get().resolve()
    }

    /// Get surface color as Rgba. Tracks only the surface signal.
    #[inline]
    pub fn surface(&self) -> Rgba {
        self.surface_sig.get().resolve()
    }

    /// Get overlay color as Rgba. Tracks only the overlay signal.
    #[inline]
    pub fn overlay(&self) -> Rgba {
        self.overlay_sig.get().resolve()
    }

    /// Get border color as Rgba. Tracks only the border signal.
    #[inline]
    pub fn border(&self) -> Rgba {
        self.border_sig.get().resolve()
    }

    /// Get border_focus color as Rgba. Tracks only the border_focus signal.
    #[inline]
    pub fn border_focus(&self) -> Rgba {
        self.border_focus_sig.get().resolve()
    }

    // =========================================================================
    // Signal accessor methods - for creating deriveds
    // =========================================================================

    /// Get the primary color signal for creating deriveds.
    #[inline]
    pub fn primary_signal(&self) -> Signal<ThemeColor> {
        self.primary_sig.clone()
    }

    /// Get the accent color signal for creating deriveds.
    #[inline]
    pub fn accent_signal(&self) -> Signal<ThemeColor> {
        self.accent_sig.clone()
    }

    /// Get the text color signal for creating deriveds.
    #[inline]
    pub fn text_signal(&self) -> Signal<ThemeColor> {
        self.text_sig.clone()
    }

    /// Get the text_muted color signal for creating deriveds.
    #[inline]
    pub fn text_muted_signal(&self) -> Signal<ThemeColor> {
        self.text_muted_sig.clone()
    }

    /// Get the text_bright color signal for creating deriveds.
    #[inline]
    pub fn text_bright_signal(&self) -> Signal<ThemeColor> {
        self.text_bright_sig.clone()
    }

    /// Get the background color signal for creating deriveds.
    #[inline]
    pub fn bg_signal(&self) -> Signal<ThemeColor> {
        self.background_sig.clone()
    }

    /// Get the background_muted color signal for creating deriveds.
    #[inline]
    pub fn bg_muted_signal(&self) -> Signal<ThemeColor> {
        self.background_muted_sig.clone()
    }

    /// Get the surface color signal for creating deriveds.
    #[inline]
    pub fn surface_signal(&self) -> Signal<ThemeColor> {
        self.surface_sig.clone()
    }

    /// Get the overlay color signal for creating deriveds.
    #[inline]
    pub fn overlay_signal(&self) -> Signal<ThemeColor> {
        self.overlay_sig.clone()
    }

    /// Get the border color signal for creating deriveds.
    #[inline]
    pub fn border_signal(&self) -> Signal<ThemeColor> {
        self.border_sig.clone()
    }

    /// Get the border_focus color signal for creating deriveds.
    #[inline]
    pub fn border_focus_signal(&self) -> Signal<ThemeColor> {
        self.border_focus_sig.clone()
    }
}

impl Default for ThemeAccessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the theme accessor.
///
/// Returns a ThemeAccessor with methods to get colors as Rgba or as Signals.
/// The accessor is cached per thread for efficiency.
///
/// # Example
/// ```ignore
/// use devfolio::theme::{t, set_theme, theme_for};
///
/// let theme = t();
/// let primary = theme.primary(); // Rgba
///
/// set_theme(&theme_for(true));
/// let new_primary = theme.primary(); // Updated!
/// ```
pub fn t() -> ThemeAccessor {
    ACCESSOR.with(|a| {
        let mut opt = a.borrow_mut();
        if opt.is_none() {
            *opt = Some(ThemeAccessor::new());
        }
        opt.clone().unwrap()
    })
}

/// Reset accessor cache (for testing).
pub fn reset_accessor() {
    ACCESSOR.with(|a| *a.borrow_mut() = None);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets::{dark, light, theme_for};
    use spark_signals::effect;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_theme_state();
        reset_accessor();
    }

    #[test]
    fn test_t_accessor_returns_colors() {
        setup();
        let accessor = t();
        let primary = accessor.primary();
        assert!(primary.is_rgb());
        assert_eq!(primary, light().primary.resolve());
    }

    #[test]
    fn test_t_accessor_is_reactive() {
        setup();
        let accessor = t();

        let initial = accessor.primary();
        set_theme(&dark());
        let after = accessor.primary();

        assert_ne!(initial, after);
        reset_theme_state();
    }

    #[test]
    fn test_t_accessor_fine_grained() {
        setup();
        let accessor = t();

        // Track primary
        let primary_count = Rc::new(Cell::new(0));
        let count = primary_count.clone();
        let primary_sig = accessor.primary_signal();
        let _e1 = effect(move || {
            let _ = primary_sig.get();
            count.set(count.get() + 1);
        });

        // Track accent
        let accent_count = Rc::new(Cell::new(0));
        let count2 = accent_count.clone();
        let accent_sig = accessor.accent_signal();
        let _e2 = effect(move || {
            let _ = accent_sig.get();
            count2.set(count2.get() + 1);
        });

        assert_eq!(primary_count.get(), 1);
        assert_eq!(accent_count.get(), 1);

        // A palette that recolors primary but leaves accent alone
        let recolored = light().with_accent(Some("#ff8800"));
        set_theme(&recolored);

        // Only the primary effect re-ran
        assert_eq!(primary_count.get(), 2);
        assert_eq!(accent_count.get(), 1);

        reset_theme_state();
    }

    #[test]
    fn test_set_theme_updates_all_colors() {
        setup();

        let accessor = t();
        let initial_primary = accessor.primary();
        let initial_text = accessor.text();

        set_theme(&dark());

        assert_ne!(initial_primary, accessor.primary());
        assert_ne!(initial_text, accessor.text());
        reset_theme_state();
    }

    #[test]
    fn test_set_theme_same_palette_is_quiet() {
        setup();
        let accessor = t();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let bg_sig = accessor.bg_signal();
        let _e = effect(move || {
            let _ = bg_sig.get();
            count_clone.set(count_clone.get() + 1);
        });
        assert_eq!(count.get(), 1);

        // Re-applying the active palette writes nothing
        set_theme(&light());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_current_theme_name_follows() {
        setup();
        assert_eq!(current_theme_name(), "light");
        set_theme(&theme_for(true));
        assert_eq!(current_theme_name(), "dark");
        reset_theme_state();
    }
}
