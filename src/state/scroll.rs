//! Scroll State Module - Document scrolling and change notifications
//!
//! The page is one vertical document; this module owns its scroll offset:
//! - Offset signal with clamping against the current maximum
//! - Line / wheel / page scroll operations
//! - Subscriptions: callbacks fire once per committed offset change
//!
//! The maximum is passed in by the caller (it depends on the built page and
//! the viewport, which the renderer owns).
//!
//! # Example
//!
//! ```ignore
//! use devfolio::state::scroll;
//!
//! let max = scroll::max_scroll(page.lines.len(), viewport_rows);
//! scroll::scroll_by(scroll::WHEEL_SCROLL as i32, max);
//!
//! let unsubscribe = scroll::on_scroll(|offset| {
//!     // re-evaluate the active section
//! });
//! // ...
//! unsubscribe();
//! ```

use std::cell::RefCell;

use spark_signals::{signal, Signal};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// Offset beyond which the status line offers the back-to-top hint.
pub const BACK_TO_TOP_THRESHOLD: u16 = 20;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static SCROLL_OFFSET: Signal<u16> = signal(0);
    static SUBSCRIBERS: RefCell<ScrollSubscribers> = RefCell::new(ScrollSubscribers::new());
}

struct ScrollSubscribers {
    handlers: Vec<(usize, Box<dyn Fn(u16)>)>,
    next_id: usize,
}

impl ScrollSubscribers {
    fn new() -> Self {
        Self { handlers: Vec::new(), next_id: 0 }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Current scroll offset (rows scrolled past the top).
pub fn scroll_offset() -> u16 {
    SCROLL_OFFSET.with(|s| s.get())
}

/// Maximum scroll offset for a page of `content_height` rows in a viewport
/// of `viewport_height` rows. Zero when the page fits.
pub fn max_scroll(content_height: usize, viewport_height: u16) -> u16 {
    content_height
        .saturating_sub(viewport_height as usize)
        .min(u16::MAX as usize) as u16
}

/// Commit a new offset: update the signal and notify subscribers.
/// No-op (and no notification) when the value is unchanged.
fn commit(new_offset: u16) -> bool {
    let changed = SCROLL_OFFSET.with(|s| {
        if s.get() == new_offset {
            false
        } else {
            s.set(new_offset);
            true
        }
    });

    if changed {
        SUBSCRIBERS.with(|subs| {
            let subs = subs.borrow();
            for (_, handler) in &subs.handlers {
                handler(new_offset);
            }
        });
    }

    changed
}

// =============================================================================
// SCROLL OPERATIONS
// =============================================================================

/// Set the scroll offset, clamped to `0..=max`.
pub fn set_scroll_offset(offset: u16, max: u16) {
    commit(offset.min(max));
}

/// Scroll by a delta amount (negative = up).
///
/// Returns `true` if scrolling occurred, `false` if already at boundary.
pub fn scroll_by(delta: i32, max: u16) -> bool {
    let current = scroll_offset();
    let new_offset = ((current as i32) + delta).clamp(0, max as i32) as u16;
    if new_offset == current {
        return false; // Already at boundary
    }
    commit(new_offset)
}

/// Scroll by most of a viewport (Page Up/Down). `direction` is +1 for down,
/// -1 for up.
pub fn scroll_page(direction: i32, viewport_height: u16, max: u16) -> bool {
    let step = ((viewport_height as f32) * PAGE_SCROLL_FACTOR).max(1.0) as i32;
    scroll_by(step * direction.signum(), max)
}

/// Scroll to the top of the document.
pub fn scroll_to_top() {
    commit(0);
}

/// Scroll to the bottom of the document.
pub fn scroll_to_bottom(max: u16) {
    commit(max);
}

/// Whether the page is far enough down to offer a back-to-top hint.
pub fn show_back_to_top() -> bool {
    scroll_offset() > BACK_TO_TOP_THRESHOLD
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

/// Subscribe to committed scroll changes. The handler receives the new
/// offset. Returns a cleanup function that unregisters exactly this handler.
pub fn on_scroll<F>(handler: F) -> impl FnOnce()
where
    F: Fn(u16) + 'static,
{
    let id = SUBSCRIBERS.with(|subs| {
        let mut subs = subs.borrow_mut();
        let id = subs.next_id();
        subs.handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        SUBSCRIBERS.with(|subs| {
            let mut subs = subs.borrow_mut();
            subs.handlers.retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

/// Reset scroll state (for testing)
pub fn reset_scroll_state() {
    SCROLL_OFFSET.with(|s| s.set(0));
    SUBSCRIBERS.with(|subs| {
        let mut subs = subs.borrow_mut();
        subs.handlers.clear();
        subs.next_id = 0;
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_scroll_state();
    }

    #[test]
    fn test_initial_offset_zero() {
        setup();
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(max_scroll(100, 24), 76);
        assert_eq!(max_scroll(10, 24), 0); // Page fits
        assert_eq!(max_scroll(24, 24), 0);
    }

    #[test]
    fn test_set_scroll_offset_clamps() {
        setup();

        set_scroll_offset(5, 10);
        assert_eq!(scroll_offset(), 5);

        // Exceeds max - should clamp
        set_scroll_offset(100, 10);
        assert_eq!(scroll_offset(), 10);

        set_scroll_offset(0, 10);
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_by_returns_bool() {
        setup();

        assert!(scroll_by(5, 10));
        assert_eq!(scroll_offset(), 5);

        // Scroll to boundary
        assert!(scroll_by(20, 10));
        assert_eq!(scroll_offset(), 10);

        // At boundary - should return false
        assert!(!scroll_by(1, 10));
        assert_eq!(scroll_offset(), 10); // Unchanged
    }

    #[test]
    fn test_scroll_by_negative() {
        setup();

        set_scroll_offset(5, 20);

        assert!(scroll_by(-3, 20));
        assert_eq!(scroll_offset(), 2);

        assert!(scroll_by(-10, 20));
        assert_eq!(scroll_offset(), 0);

        // At top - should return false
        assert!(!scroll_by(-1, 20));
    }

    #[test]
    fn test_scroll_page_step() {
        setup();

        // 90% of a 20-row viewport = 18 rows
        assert!(scroll_page(1, 20, 100));
        assert_eq!(scroll_offset(), 18);

        assert!(scroll_page(-1, 20, 100));
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_to_top_bottom() {
        setup();

        scroll_to_bottom(42);
        assert_eq!(scroll_offset(), 42);

        scroll_to_top();
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        setup();

        assert!(!show_back_to_top());
        set_scroll_offset(BACK_TO_TOP_THRESHOLD, 100);
        assert!(!show_back_to_top()); // Strictly greater than
        set_scroll_offset(BACK_TO_TOP_THRESHOLD + 1, 100);
        assert!(show_back_to_top());
    }

    #[test]
    fn test_subscriber_notified_per_change() {
        setup();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _cleanup = on_scroll(move |offset| {
            seen_clone.borrow_mut().push(offset);
        });

        scroll_by(3, 100);
        scroll_by(3, 100);
        scroll_to_top();

        assert_eq!(*seen.borrow(), vec![3, 6, 0]);
    }

    #[test]
    fn test_no_notification_at_boundary() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let _cleanup = on_scroll(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        // Already at top: clamped no-ops fire nothing
        assert!(!scroll_by(-1, 100));
        set_scroll_offset(0, 100);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on_scroll(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        scroll_by(1, 100);
        assert_eq!(count.get(), 1);

        cleanup();

        scroll_by(1, 100);
        assert_eq!(count.get(), 1); // No more increments
    }

    #[test]
    fn test_multiple_subscribers() {
        setup();

        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let a_clone = a.clone();
        let b_clone = b.clone();
        let _cleanup_a = on_scroll(move |_| a_clone.set(a_clone.get() + 1));
        let cleanup_b = on_scroll(move |_| b_clone.set(b_clone.get() + 1));

        scroll_by(1, 100);
        assert_eq!((a.get(), b.get()), (1, 1));

        cleanup_b();
        scroll_by(1, 100);
        assert_eq!((a.get(), b.get()), (2, 1));
    }

    #[test]
    fn test_constants() {
        assert_eq!(LINE_SCROLL, 1);
        assert_eq!(WHEEL_SCROLL, 3);
        assert!((PAGE_SCROLL_FACTOR - 0.9).abs() < 0.001);
    }
}
