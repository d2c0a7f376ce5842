//! Typewriter Reveal System - Timed prefix reveal for the hero line
//!
//! Reveals a string one grapheme cluster at a time on a fixed delay, the
//! classic typewriter effect. Split in two layers:
//!
//! - `Reveal` - pure state machine (text, cluster boundaries, progress)
//! - registry + timer thread - drives a `Reveal` forward on a delay
//!
//! The timer thread advances a thread-safe counter; the visible prefix
//! signal is synced from it on read. Effects that should repaint on
//! progress subscribe through `reveal_signal` and something outside the
//! effect (the event loop) pumps `revealed_text` once per frame.
//!
//! # API
//!
//! - `start_reveal(text, delay)` - Begin revealing, returns id
//! - `revealed_text(id)` - Sync and read the visible prefix
//! - `reveal_signal(id)` - Prefix signal for reactive tracking
//! - `restart_reveal(id, text, delay)` - Back to zero with new parameters
//! - `cancel_reveal(id)` - Stop and forget; nothing is emitted afterwards
//!
//! # Example
//!
//! ```ignore
//! use devfolio::state::typewriter::{self, DEFAULT_TYPE_DELAY};
//!
//! let id = typewriter::start_reveal("Desenvolvedor Full Stack", DEFAULT_TYPE_DELAY);
//!
//! // Each frame: pump the signal, repaint happens reactively
//! let visible = typewriter::revealed_text(id);
//!
//! typewriter::cancel_reveal(id);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use spark_signals::{signal, Signal};
use unicode_segmentation::UnicodeSegmentation;

/// Delay between revealed clusters when none is configured.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(100);

// =============================================================================
// PURE CORE
// =============================================================================

/// The typewriter state machine, free of any timing.
///
/// For text of n clusters there are exactly n + 1 states: the empty prefix,
/// then one more cluster per step, ending at the full text. `advance` never
/// wraps around; at the end it simply reports completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    text: String,
    /// Cumulative byte offset of each cluster end; `boundaries[i]` is the
    /// prefix length in bytes after revealing i + 1 clusters.
    boundaries: Vec<usize>,
    shown: usize,
}

impl Reveal {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut boundaries = Vec::new();
        let mut end = 0usize;
        for grapheme in text.graphemes(true) {
            end += grapheme.len();
            boundaries.push(end);
        }
        Self { text, boundaries, shown: 0 }
    }

    /// Total cluster count.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Clusters revealed so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Reveal one more cluster. Returns false once the text is complete;
    /// further calls keep returning false without changing anything.
    pub fn advance(&mut self) -> bool {
        if self.shown >= self.len() {
            return false;
        }
        self.shown += 1;
        true
    }

    /// The currently visible prefix. Always a valid cluster boundary.
    pub fn prefix(&self) -> &str {
        self.prefix_at(self.shown)
    }

    /// Prefix after `shown` clusters (clamped to the full text).
    pub fn prefix_at(&self, shown: usize) -> &str {
        if shown == 0 {
            return "";
        }
        let idx = shown.min(self.len());
        &self.text[..self.boundaries[idx - 1]]
    }

    /// Whether the whole text is visible. An empty text is complete from
    /// the start.
    pub fn is_complete(&self) -> bool {
        self.shown >= self.len()
    }

    /// Back to the empty prefix.
    pub fn reset(&mut self) {
        self.shown = 0;
    }
}

// =============================================================================
// REVEAL REGISTRY
// =============================================================================

/// Handle to a running (or finished) reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(u64);

/// Per-reveal registry entry owning the timer state for one run.
struct RevealEntry {
    /// Visible prefix signal (local, synced from the thread-safe counter)
    prefix: Signal<String>,
    /// Cross-thread progress: clusters revealed so far
    shown_atomic: Arc<AtomicUsize>,
    /// Flag to signal the timer thread to stop
    running: Arc<AtomicBool>,
    /// Background timer thread handle
    handle: Option<JoinHandle<()>>,
    /// The reveal plan for this run
    reveal: Reveal,
}

thread_local! {
    static REVEAL_REGISTRY: RefCell<HashMap<RevealId, RevealEntry>> =
        RefCell::new(HashMap::new());
    static NEXT_REVEAL_ID: Cell<u64> = const { Cell::new(1) };
}

/// Spawn the timer for one run. Each run gets fresh atomics, so a straggler
/// thread from a previous run can never write into the new one.
fn spawn_run(reveal: &Reveal, delay: Duration) -> (Arc<AtomicUsize>, Arc<AtomicBool>, Option<JoinHandle<()>>) {
    let delay = if delay.is_zero() { DEFAULT_TYPE_DELAY } else { delay };
    let total = reveal.len();
    let shown_atomic = Arc::new(AtomicUsize::new(0));
    let running = Arc::new(AtomicBool::new(total > 0));

    // Empty text is complete immediately; no thread, no sleeping.
    if total == 0 {
        return (shown_atomic, running, None);
    }

    let shown_for_thread = shown_atomic.clone();
    let running_for_thread = running.clone();
    let handle = thread::spawn(move || {
        let mut shown = 0usize;
        while shown < total && running_for_thread.load(Ordering::SeqCst) {
            thread::sleep(delay);
            if !running_for_thread.load(Ordering::SeqCst) {
                break;
            }
            shown += 1;
            shown_for_thread.store(shown, Ordering::SeqCst);
        }
        running_for_thread.store(false, Ordering::SeqCst);
    });

    (shown_atomic, running, Some(handle))
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Start revealing `text`, one cluster per `delay`.
///
/// A zero delay falls back to `DEFAULT_TYPE_DELAY` (the timer must actually
/// tick). Returns an id for querying and cancelling.
pub fn start_reveal(text: &str, delay: Duration) -> RevealId {
    let id = NEXT_REVEAL_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        RevealId(id)
    });

    let reveal = Reveal::new(text);
    let (shown_atomic, running, handle) = spawn_run(&reveal, delay);

    REVEAL_REGISTRY.with(|registry| {
        registry.borrow_mut().insert(
            id,
            RevealEntry {
                prefix: signal(String::new()),
                shown_atomic,
                running,
                handle,
                reveal,
            },
        );
    });

    id
}

/// Sync the timer's progress into the prefix signal and return the visible
/// prefix. Returns "" for unknown (cancelled) ids.
///
/// Call this from the event loop, not from inside a render effect: the sync
/// writes the signal, and the signal is what effects subscribe to.
pub fn revealed_text(id: RevealId) -> String {
    REVEAL_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if let Some(entry) = registry.get_mut(&id) {
            let shown = entry.shown_atomic.load(Ordering::SeqCst).min(entry.reveal.len());
            let prefix = entry.reveal.prefix_at(shown);
            if entry.prefix.get() != prefix {
                entry.prefix.set(prefix.to_string());
            }
            prefix.to_string()
        } else {
            String::new()
        }
    })
}

/// The prefix signal for reactive tracking, or None for unknown ids.
///
/// The signal only moves when `revealed_text` syncs it, so effects reading
/// it re-run once per pump, not once per timer tick.
pub fn reveal_signal(id: RevealId) -> Option<Signal<String>> {
    REVEAL_REGISTRY.with(|registry| {
        registry.borrow().get(&id).map(|e| e.prefix.clone())
    })
}

/// Clusters revealed so far (0 for unknown ids).
pub fn revealed_count(id: RevealId) -> usize {
    REVEAL_REGISTRY.with(|registry| {
        let registry = registry.borrow();
        registry
            .get(&id)
            .map(|e| e.shown_atomic.load(Ordering::SeqCst).min(e.reveal.len()))
            .unwrap_or(0)
    })
}

/// Whether the full text is visible. False for unknown ids.
pub fn is_reveal_complete(id: RevealId) -> bool {
    REVEAL_REGISTRY.with(|registry| {
        let registry = registry.borrow();
        registry
            .get(&id)
            .map(|e| e.shown_atomic.load(Ordering::SeqCst) >= e.reveal.len())
            .unwrap_or(false)
    })
}

/// Whether the timer thread for this id is still ticking.
pub fn is_reveal_running(id: RevealId) -> bool {
    REVEAL_REGISTRY.with(|registry| {
        let registry = registry.borrow();
        registry
            .get(&id)
            .map(|e| e.running.load(Ordering::SeqCst))
            .unwrap_or(false)
    })
}

/// Restart a reveal from zero with new text and/or delay.
///
/// Changing either parameter goes through here: the old timer is stopped
/// (its atomics are orphaned with it), the prefix signal resets to empty,
/// and a fresh timer starts. The signal instance is kept, so effects stay
/// subscribed across the restart. No-op for unknown ids.
pub fn restart_reveal(id: RevealId, text: &str, delay: Duration) {
    REVEAL_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let Some(entry) = registry.get_mut(&id) else {
            return;
        };

        entry.running.store(false, Ordering::SeqCst);

        let reveal = Reveal::new(text);
        let (shown_atomic, running, handle) = spawn_run(&reveal, delay);
        entry.reveal = reveal;
        entry.shown_atomic = shown_atomic;
        entry.running = running;
        entry.handle = handle;
        entry.prefix.set(String::new());
    });
}

/// Stop a reveal and remove it from the registry.
///
/// Afterwards `revealed_text` returns "" and no further progress can be
/// observed: the timer thread checks its flag before every store, and its
/// atomics die with the entry.
pub fn cancel_reveal(id: RevealId) {
    REVEAL_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if let Some(entry) = registry.remove(&id) {
            entry.running.store(false, Ordering::SeqCst);
            // Thread exits on its next flag check; not joined to avoid
            // blocking the caller for up to one delay.
        }
    });
}

/// Reset all reveal state (for testing).
///
/// Stops every timer and clears the registry.
pub fn reset_typewriter_state() {
    REVEAL_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        for entry in registry.values_mut() {
            entry.running.store(false, Ordering::SeqCst);
        }
        registry.clear();
    });
    NEXT_REVEAL_ID.with(|next| next.set(1));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_typewriter_state();
    }

    // -------------------------------------------------------------------------
    // Pure Reveal
    // -------------------------------------------------------------------------

    #[test]
    fn test_reveal_exact_state_sequence() {
        let mut reveal = Reveal::new("Hi");

        // n + 1 states for n clusters, in order, one cluster per step
        assert_eq!(reveal.prefix(), "");
        assert!(reveal.advance());
        assert_eq!(reveal.prefix(), "H");
        assert!(reveal.advance());
        assert_eq!(reveal.prefix(), "Hi");
        assert!(reveal.is_complete());

        // Completed: advance reports false and nothing changes
        assert!(!reveal.advance());
        assert_eq!(reveal.prefix(), "Hi");
        assert_eq!(reveal.shown(), 2);
    }

    #[test]
    fn test_reveal_empty_text_complete_from_start() {
        let mut reveal = Reveal::new("");
        assert!(reveal.is_complete());
        assert_eq!(reveal.prefix(), "");
        assert!(!reveal.advance());
    }

    #[test]
    fn test_reveal_reset() {
        let mut reveal = Reveal::new("abc");
        reveal.advance();
        reveal.advance();
        reveal.reset();
        assert_eq!(reveal.shown(), 0);
        assert_eq!(reveal.prefix(), "");
        assert!(!reveal.is_complete());
    }

    #[test]
    fn test_reveal_steps_are_grapheme_clusters() {
        // "é" written as e + combining accent is one cluster: every prefix
        // must be a valid string, never splitting the accent off.
        let mut reveal = Reveal::new("Ze\u{0301}n");
        assert_eq!(reveal.len(), 3);
        reveal.advance();
        assert_eq!(reveal.prefix(), "Z");
        reveal.advance();
        assert_eq!(reveal.prefix(), "Ze\u{0301}");
        reveal.advance();
        assert_eq!(reveal.prefix(), "Ze\u{0301}n");
    }

    #[test]
    fn test_reveal_prefix_at_clamps() {
        let reveal = Reveal::new("ab");
        assert_eq!(reveal.prefix_at(0), "");
        assert_eq!(reveal.prefix_at(1), "a");
        assert_eq!(reveal.prefix_at(5), "ab");
    }

    // -------------------------------------------------------------------------
    // Registry + timer
    // -------------------------------------------------------------------------

    #[test]
    fn test_start_reveal_reaches_full_text() {
        setup();

        let id = start_reveal("Hi", Duration::from_millis(5));
        assert!(is_reveal_running(id));

        // Generous margin; exact tick timing is the thread's business
        thread::sleep(Duration::from_millis(300));
        assert_eq!(revealed_text(id), "Hi");
        assert!(is_reveal_complete(id));
        assert!(!is_reveal_running(id));
    }

    #[test]
    fn test_reveal_progress_is_monotonic() {
        setup();

        let id = start_reveal("abcdef", Duration::from_millis(5));
        let mut last = 0usize;
        for _ in 0..20 {
            thread::sleep(Duration::from_millis(10));
            let count = revealed_count(id);
            assert!(count >= last, "progress went backwards: {} -> {}", last, count);
            assert!(count <= 6);
            last = count;
        }
    }

    #[test]
    fn test_empty_text_completes_without_thread() {
        setup();

        let id = start_reveal("", Duration::from_millis(5));
        assert!(is_reveal_complete(id));
        assert!(!is_reveal_running(id));
        assert_eq!(revealed_text(id), "");
    }

    #[test]
    fn test_cancel_silences_reveal() {
        setup();

        // Long delay: the first store would happen far in the future
        let id = start_reveal("never shown", Duration::from_millis(500));
        cancel_reveal(id);

        assert!(!is_reveal_running(id));
        assert_eq!(revealed_text(id), "");
        assert!(reveal_signal(id).is_none());

        // Even after waiting, a cancelled reveal stays silent
        thread::sleep(Duration::from_millis(50));
        assert_eq!(revealed_text(id), "");
        assert_eq!(revealed_count(id), 0);
    }

    #[test]
    fn test_cancel_is_safe_twice() {
        setup();
        let id = start_reveal("x", Duration::from_millis(5));
        cancel_reveal(id);
        cancel_reveal(id);
        assert_eq!(revealed_text(id), "");
    }

    #[test]
    fn test_restart_begins_again_from_empty() {
        setup();

        let id = start_reveal("Hello", Duration::from_millis(5));
        thread::sleep(Duration::from_millis(300));
        assert!(is_reveal_complete(id));

        restart_reveal(id, "Bye", Duration::from_millis(5));
        // Fresh run: counter back at zero, signal reset
        assert_eq!(reveal_signal(id).unwrap().get(), "");

        thread::sleep(Duration::from_millis(300));
        assert_eq!(revealed_text(id), "Bye");
        assert!(is_reveal_complete(id));
    }

    #[test]
    fn test_restart_unknown_id_is_noop() {
        setup();
        let id = start_reveal("x", Duration::from_millis(5));
        cancel_reveal(id);
        restart_reveal(id, "y", Duration::from_millis(5));
        assert!(reveal_signal(id).is_none());
    }

    #[test]
    fn test_signal_survives_restart() {
        setup();

        let id = start_reveal("one", Duration::from_millis(5));
        let sig = reveal_signal(id).unwrap();
        restart_reveal(id, "two", Duration::from_millis(5));

        thread::sleep(Duration::from_millis(300));
        let _ = revealed_text(id);
        // The pre-restart signal instance observes the new run
        assert_eq!(sig.get(), "two");
    }

    #[test]
    fn test_zero_delay_uses_default() {
        setup();

        let id = start_reveal("a", Duration::ZERO);
        // Still a real timer, not a busy loop; it just ticks at the default
        assert!(is_reveal_running(id) || is_reveal_complete(id));
        thread::sleep(Duration::from_millis(400));
        assert!(is_reveal_complete(id));
    }

    #[test]
    fn test_independent_reveals() {
        setup();

        let a = start_reveal("aaaa", Duration::from_millis(5));
        let b = start_reveal("b", Duration::from_millis(5));
        assert_ne!(a, b);

        thread::sleep(Duration::from_millis(300));
        assert_eq!(revealed_text(a), "aaaa");
        assert_eq!(revealed_text(b), "b");

        cancel_reveal(a);
        assert_eq!(revealed_text(a), "");
        assert_eq!(revealed_text(b), "b");
    }
}
