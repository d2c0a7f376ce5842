//! Page Module - Assembling sections into one scrollable document.
//!
//! `build_page` walks the profile's present sections in declared order,
//! runs each section builder, and records an [`Anchor`] with the document
//! rows the section landed on. Anchors answer the geometry probes the
//! section tracker asks while scrolling.

use super::line::Line;
use super::sections as builders;
use crate::content::Profile;
use crate::state::sections::Section;
use crate::theme::t;
use crate::types::SectionBounds;

// =============================================================================
// Anchor and Page
// =============================================================================

/// Document rows occupied by one section, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub section: Section,
    pub top: usize,
    pub bottom: usize,
}

/// The assembled document plus where each section landed.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line>,
    pub anchors: Vec<Anchor>,
}

impl Page {
    /// Total document height in rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Viewport-relative bounds of a section at a scroll offset, or `None`
    /// when the section is not on the page.
    pub fn bounds(&self, section: Section, scroll_offset: u16) -> Option<SectionBounds> {
        self.anchors
            .iter()
            .find(|anchor| anchor.section == section)
            .map(|anchor| {
                SectionBounds::new(
                    anchor.top as i32 - scroll_offset as i32,
                    anchor.bottom as i32 - scroll_offset as i32,
                )
            })
    }

    /// Document row a section starts on, for jump keys.
    pub fn anchor_top(&self, section: Section) -> Option<u16> {
        self.anchors
            .iter()
            .find(|anchor| anchor.section == section)
            .map(|anchor| anchor.top.min(u16::MAX as usize) as u16)
    }
}

// =============================================================================
// Building
// =============================================================================

/// Build the full document at a width, revealing `typed` in the hero.
///
/// Sections alternate between the page background and the muted band, the
/// way the original layout stripes them. Colors are read through the theme
/// accessor, so calling this inside an effect subscribes to palette swaps.
pub fn build_page(profile: &Profile, typed: &str, reveal_complete: bool, width: u16) -> Page {
    let theme = t();
    let mut lines: Vec<Line> = Vec::new();
    let mut anchors = Vec::new();

    for (index, section) in profile.sections().into_iter().enumerate() {
        let body = match section {
            Section::Home => builders::home(profile, typed, reveal_complete, width, &theme),
            Section::About => builders::about(profile, width, &theme),
            Section::Skills => builders::skills(profile, width, &theme),
            Section::Projects => builders::projects(profile, width, &theme),
            Section::Experience => builders::experience(profile, width, &theme),
            Section::Services => builders::services(profile, width, &theme),
            Section::Testimonials => builders::testimonials(profile, width, &theme),
            Section::Contact => builders::contact(profile, width, &theme),
        };

        let top = lines.len();
        let band = (index % 2 == 1).then(|| theme.bg_muted());
        for mut line in body {
            if let (Some(bg), None) = (band, line.bg) {
                line.bg = Some(bg);
            }
            lines.push(line);
        }
        anchors.push(Anchor {
            section,
            top,
            bottom: lines.len().saturating_sub(1),
        });
    }

    Page { lines, anchors }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sections::{evaluate, REFERENCE_OFFSET};
    use crate::theme::{reset_accessor, reset_theme_state};

    fn setup() -> Profile {
        reset_theme_state();
        reset_accessor();
        Profile::builtin()
    }

    fn build(profile: &Profile) -> Page {
        build_page(profile, "", false, 80)
    }

    #[test]
    fn test_anchors_in_declared_order() {
        let profile = setup();
        let page = build(&profile);

        let order: Vec<Section> = page.anchors.iter().map(|a| a.section).collect();
        assert_eq!(order, profile.sections());
        assert_eq!(order.first(), Some(&Section::Home));
        assert_eq!(order.last(), Some(&Section::Contact));
    }

    #[test]
    fn test_anchors_tile_the_document() {
        let profile = setup();
        let page = build(&profile);

        assert_eq!(page.anchors[0].top, 0);
        for pair in page.anchors.windows(2) {
            assert_eq!(pair[1].top, pair[0].bottom + 1);
        }
        assert_eq!(
            page.anchors.last().unwrap().bottom,
            page.height() - 1,
        );
    }

    #[test]
    fn test_bounds_follow_scroll() {
        let profile = setup();
        let page = build(&profile);

        let about = page
            .anchors
            .iter()
            .find(|a| a.section == Section::About)
            .copied()
            .unwrap();

        let at_rest = page.bounds(Section::About, 0).unwrap();
        assert_eq!(at_rest.top, about.top as i32);

        let scrolled = page.bounds(Section::About, about.top as u16).unwrap();
        assert_eq!(scrolled.top, 0);
        assert_eq!(scrolled.bottom, (about.bottom - about.top) as i32);
    }

    #[test]
    fn test_missing_section_has_no_anchor() {
        let mut profile = setup();
        profile.testimonials.clear();
        let page = build(&profile);

        assert!(page.bounds(Section::Testimonials, 0).is_none());
        assert!(page.anchor_top(Section::Testimonials).is_none());
        // The rest still tile
        for pair in page.anchors.windows(2) {
            assert_eq!(pair[1].top, pair[0].bottom + 1);
        }
    }

    #[test]
    fn test_probe_picks_section_under_reference() {
        let profile = setup();
        let page = build(&profile);

        // At rest the first section owns the reference row
        let probe = |s: Section| page.bounds(s, 0);
        assert_eq!(
            evaluate(&Section::ALL, probe, REFERENCE_OFFSET),
            Some(Section::Home)
        );

        // Scrolled to a section's top, that section owns it
        for anchor in &page.anchors {
            let offset = anchor.top as u16;
            let probe = |s: Section| page.bounds(s, offset);
            assert_eq!(
                evaluate(&Section::ALL, probe, REFERENCE_OFFSET),
                Some(anchor.section),
                "at scroll {}",
                offset
            );
        }
    }

    #[test]
    fn test_height_stable_during_reveal() {
        let profile = setup();

        let start = build_page(&profile, "", false, 80);
        let end = build_page(&profile, &profile.typewriter_text, true, 80);
        assert_eq!(start.height(), end.height());
        assert_eq!(start.anchors, end.anchors);
    }

    #[test]
    fn test_bands_alternate() {
        let profile = setup();
        let page = build(&profile);

        // Second section sits on the muted band
        let about = page
            .anchors
            .iter()
            .find(|a| a.section == Section::About)
            .unwrap();
        assert!(page.lines[about.top].bg.is_some());

        // First does not
        let home = page.anchors.first().unwrap();
        assert!(page.lines[home.top].bg.is_none());
    }
}
