//! Section Tracking Module - Scroll-spy state for the page sections
//!
//! Tracks which portfolio section the viewport is currently "in" so the nav
//! bar can highlight it. The page declares its sections in viewing order;
//! every scroll change re-evaluates which section's bounds contain the
//! reference row.
//!
//! # API
//!
//! - `active_section()` - Currently highlighted section
//! - `set_active_section(s)` - Set it directly (jump keys)
//! - `evaluate(sections, probe, offset)` - Pure first-match scan
//! - `update_active_section(probe, offset)` - Evaluate and commit
//! - `reset_section_state()` - Reset (for testing)
//!
//! # Example
//!
//! ```ignore
//! use devfolio::state::sections::{self, Section, REFERENCE_OFFSET};
//!
//! // After a scroll, re-evaluate against the current page geometry
//! sections::update_active_section(
//!     |s| page.bounds(s, scroll_offset()),
//!     REFERENCE_OFFSET,
//! );
//! println!("active: {}", sections::active_section().title());
//! ```

use spark_signals::{signal, Signal};

use crate::types::SectionBounds;

// =============================================================================
// TYPES
// =============================================================================

/// The portfolio sections, in declared viewing order.
///
/// The order here is the order they appear on the page, and it is also the
/// tie-break order for tracking: when a boundary row belongs to two sections,
/// the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Services,
    Testimonials,
    Contact,
}

impl Section {
    /// Every section, in declared viewing order.
    pub const ALL: [Section; 8] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Services,
        Self::Testimonials,
        Self::Contact,
    ];

    /// Stable lowercase id (matches anchors and config keys).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    /// Display name for the nav bar and menu.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Services => "Services",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "experience" => Some(Self::Experience),
            "services" => Some(Self::Services),
            "testimonials" => Some(Self::Testimonials),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Position in declared order (0-based).
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Jump key shown in the menu (1-8).
    pub fn jump_key(&self) -> char {
        (b'1' + self.index() as u8) as char
    }
}

// =============================================================================
// STATE
// =============================================================================

/// The viewport's reference row: a section is active when its bounds contain
/// this row. Sits just below the nav bar.
pub const REFERENCE_OFFSET: i32 = 2;

thread_local! {
    static ACTIVE_SECTION: Signal<Section> = signal(Section::Home);
}

/// Get the currently active section.
pub fn active_section() -> Section {
    ACTIVE_SECTION.with(|s| s.get())
}

/// Set the active section directly.
pub fn set_active_section(section: Section) {
    ACTIVE_SECTION.with(|s| s.set(section));
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Find the section whose bounds contain `reference_offset`.
///
/// Pure first-match scan in the given order. The probe returns `None` for
/// sections that are not on the page; those are skipped silently. Returns
/// `None` when no section contains the reference row (between-sections gap,
/// or an empty page).
pub fn evaluate(
    sections: &[Section],
    probe: impl Fn(Section) -> Option<SectionBounds>,
    reference_offset: i32,
) -> Option<Section> {
    for &section in sections {
        let Some(bounds) = probe(section) else {
            continue;
        };
        if bounds.contains(reference_offset) {
            return Some(section);
        }
    }
    None
}

/// Re-evaluate the active section from current page geometry and commit.
///
/// Recomputes from scratch on every call, so coalesced or dropped scroll
/// notifications can only delay the highlight, never corrupt it. When no
/// section contains the reference row the previous value is kept (sticky);
/// the highlight never resets to nothing mid-scroll.
///
/// Returns true when the active section actually changed.
pub fn update_active_section(
    probe: impl Fn(Section) -> Option<SectionBounds>,
    reference_offset: i32,
) -> bool {
    let Some(next) = evaluate(&Section::ALL, probe, reference_offset) else {
        return false;
    };
    ACTIVE_SECTION.with(|s| {
        if s.get() == next {
            false
        } else {
            s.set(next);
            true
        }
    })
}

/// Reset section state (for testing)
pub fn reset_section_state() {
    ACTIVE_SECTION.with(|s| s.set(Section::Home));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_section_state();
    }

    #[test]
    fn test_initial_section_is_first_declared() {
        setup();
        assert_eq!(active_section(), Section::Home);
        assert_eq!(Section::ALL[0], Section::Home);
    }

    #[test]
    fn test_from_str_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_str(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_str("ABOUT"), Some(Section::About));
        assert_eq!(Section::from_str("nope"), None);
    }

    #[test]
    fn test_jump_keys_are_one_through_eight() {
        assert_eq!(Section::Home.jump_key(), '1');
        assert_eq!(Section::Contact.jump_key(), '8');
    }

    #[test]
    fn test_evaluate_picks_containing_section() {
        // Three sections, the middle one straddles the reference row.
        let sections = [Section::Home, Section::About, Section::Skills];
        let probe = |s: Section| match s {
            Section::Home => Some(SectionBounds::new(-500, -50)),
            Section::About => Some(SectionBounds::new(-50, 600)),
            Section::Skills => Some(SectionBounds::new(600, 1200)),
            _ => None,
        };
        assert_eq!(evaluate(&sections, probe, 100), Some(Section::About));
    }

    #[test]
    fn test_evaluate_first_match_wins_on_shared_boundary() {
        // About ends exactly where Skills begins; the reference row sits on
        // the shared boundary. Declared order resolves the tie.
        let sections = [Section::About, Section::Skills];
        let probe = |s: Section| match s {
            Section::About => Some(SectionBounds::new(-50, 600)),
            Section::Skills => Some(SectionBounds::new(600, 1200)),
            _ => None,
        };
        assert_eq!(evaluate(&sections, probe, 600), Some(Section::About));
    }

    #[test]
    fn test_evaluate_no_match_returns_none() {
        let sections = [Section::Home];
        let probe = |_: Section| Some(SectionBounds::new(200, 400));
        assert_eq!(evaluate(&sections, probe, 100), None);
    }

    #[test]
    fn test_evaluate_skips_missing_sections() {
        // Projects has no anchor on this page; the scan moves past it.
        let sections = [Section::Projects, Section::Experience];
        let probe = |s: Section| match s {
            Section::Experience => Some(SectionBounds::new(0, 100)),
            _ => None,
        };
        assert_eq!(evaluate(&sections, probe, 50), Some(Section::Experience));
    }

    #[test]
    fn test_update_commits_match() {
        setup();
        let changed = update_active_section(
            |s| match s {
                Section::Skills => Some(SectionBounds::new(0, 10)),
                _ => None,
            },
            5,
        );
        assert!(changed);
        assert_eq!(active_section(), Section::Skills);
    }

    #[test]
    fn test_update_is_sticky_on_no_match() {
        setup();
        set_active_section(Section::Projects);

        // Nothing contains the reference row: the previous value stays.
        let changed = update_active_section(|_| None, 100);
        assert!(!changed);
        assert_eq!(active_section(), Section::Projects);

        let changed = update_active_section(|_| Some(SectionBounds::new(500, 900)), 100);
        assert!(!changed);
        assert_eq!(active_section(), Section::Projects);
    }

    #[test]
    fn test_update_unchanged_value_reports_false() {
        setup();
        let probe = |s: Section| match s {
            Section::Home => Some(SectionBounds::new(0, 10)),
            _ => None,
        };
        assert!(!update_active_section(probe, 5));
        assert_eq!(active_section(), Section::Home);
    }

    #[test]
    fn test_update_recomputes_from_current_geometry() {
        setup();
        // Simulate two coalesced scroll steps: only the final geometry
        // matters, the result is the same as if each step were processed.
        let far_scrolled = |s: Section| match s {
            Section::Contact => Some(SectionBounds::new(-10, 40)),
            _ => Some(SectionBounds::new(-2000, -100)),
        };
        update_active_section(far_scrolled, REFERENCE_OFFSET);
        assert_eq!(active_section(), Section::Contact);
    }
}
