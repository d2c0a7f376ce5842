//! Section builders - One function per page section.
//!
//! Each builder turns a slice of the profile into styled [`Line`]s. Section
//! headings and leads live here as literals; everything else comes from the
//! profile. Builders read colors through the theme accessor, so the render
//! effect re-runs them when the palette swaps.

use super::line::{Line, Span};
use crate::content::Profile;
use crate::text::{pad_to_width, string_width, wrap_text};
use crate::theme::ThemeAccessor;
use crate::types::{Attr, BorderStyle, TextAlign};

/// Columns a skill gauge occupies, excluding name and percent.
pub const SKILL_BAR_WIDTH: usize = 24;

/// Cap on card width so boxes stay readable on wide terminals.
const CARD_MAX_WIDTH: usize = 60;

/// Left margin for section bodies.
const INDENT: &str = "  ";

fn inner_width(width: u16) -> usize {
    (width as usize).saturating_sub(4).max(10)
}

/// Shared heading: centered title in the brand color, optional lead below.
fn heading(title: &str, lead: &str, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = vec![Line::blank()];
    lines.push(
        Line::from_span(Span::new(title, t.primary()).with_attrs(Attr::BOLD))
            .aligned(TextAlign::Center),
    );
    if !lead.is_empty() {
        lines.push(
            Line::from_span(Span::new(lead, t.text_muted()).with_attrs(Attr::ITALIC))
                .aligned(TextAlign::Center),
        );
    }
    lines.push(Line::blank());
    lines
}

/// Body paragraph wrapped to the content width, indented two columns.
fn paragraph(text: &str, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    wrap_text(text, inner_width(width))
        .into_iter()
        .map(|row| {
            Line::new()
                .push(Span::new(INDENT, t.text()))
                .push(Span::new(row, t.text()))
        })
        .collect()
}

// =============================================================================
// Home
// =============================================================================

/// Hero: greeting, name, the typewriter line, tagline, badges.
///
/// The typewriter rows are reserved from the full text so the page keeps
/// its height while the reveal is running; anchors below never shift.
pub fn home(
    profile: &Profile,
    typed: &str,
    reveal_complete: bool,
    width: u16,
    t: &ThemeAccessor,
) -> Vec<Line> {
    let inner = inner_width(width);
    let mut lines = vec![Line::blank(), Line::blank()];

    if !profile.greeting.is_empty() {
        lines.push(
            Line::from_span(Span::new(&profile.greeting, t.text_muted()))
                .aligned(TextAlign::Center),
        );
    }
    lines.push(
        Line::from_span(Span::new(&profile.name, t.text_bright()).with_attrs(Attr::BOLD))
            .aligned(TextAlign::Center),
    );

    // Reserve rows for the fully revealed text
    let reserved = wrap_text(&profile.typewriter_text, inner).len();
    let typed_rows = wrap_text(typed, inner);
    for i in 0..reserved {
        let mut line = Line::new().aligned(TextAlign::Center);
        if i < typed_rows.len() {
            line = line.push(Span::new(&typed_rows[i], t.primary()).with_attrs(Attr::BOLD));
            let is_caret_row = i + 1 == typed_rows.len();
            if is_caret_row && !reveal_complete {
                line = line.push(Span::new("\u{258c}", t.primary()));
            }
        }
        lines.push(line);
    }

    if !profile.tagline.is_empty() {
        lines.push(Line::blank());
        for row in wrap_text(&profile.tagline, inner) {
            lines.push(
                Line::from_span(Span::new(row, t.text_muted())).aligned(TextAlign::Center),
            );
        }
    }

    if !profile.badges.is_empty() {
        lines.push(Line::blank());
        lines.extend(badge_rows(&profile.badges, inner, t));
    }

    lines.push(Line::blank());
    lines.push(
        Line::from_span(Span::new("\u{2193} scroll", t.text_muted()).with_attrs(Attr::DIM))
            .aligned(TextAlign::Center),
    );
    lines.push(Line::blank());
    lines
}

/// Badges as pills packed greedily into centered rows.
fn badge_rows(badges: &[String], inner: usize, t: &ThemeAccessor) -> Vec<Line> {
    let mut rows = Vec::new();
    let mut line = Line::new().aligned(TextAlign::Center);
    let mut used = 0usize;

    for badge in badges {
        let pill = format!(" {} ", badge);
        let pill_width = string_width(&pill);
        let gap = usize::from(used > 0);
        if used > 0 && used + gap + pill_width > inner {
            rows.push(line);
            line = Line::new().aligned(TextAlign::Center);
            used = 0;
        } else if used > 0 {
            line = line.push(Span::new(" ", t.text()));
            used += 1;
        }
        line = line.push(Span::new(pill, t.accent()).on(t.surface()));
        used += pill_width;
    }
    if !line.spans.is_empty() {
        rows.push(line);
    }
    rows
}

// =============================================================================
// About
// =============================================================================

/// About: subheading lead, paragraphs, facts row.
pub fn about(profile: &Profile, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("About", &profile.about.subheading, t);

    for (i, text) in profile.about.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.extend(paragraph(text, width, t));
    }

    if !profile.about.facts.is_empty() {
        lines.push(Line::blank());
        let mut line = Line::new().aligned(TextAlign::Center);
        for (i, fact) in profile.about.facts.iter().enumerate() {
            if i > 0 {
                line = line.push(Span::new("  \u{2502}  ", t.border()));
            }
            line = line
                .push(Span::new(&fact.value, t.text_bright()).with_attrs(Attr::BOLD))
                .push(Span::new(" ", t.text()))
                .push(Span::new(&fact.label, t.text_muted()));
        }
        lines.push(line);
    }

    lines.push(Line::blank());
    lines
}

// =============================================================================
// Skills
// =============================================================================

/// Skills: groups of gauges scaled from the 0-100 level.
pub fn skills(profile: &Profile, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("Skills", "My technical level", t);
    let inner = inner_width(width);

    for (gi, group) in profile.skill_groups.iter().enumerate() {
        if gi > 0 {
            lines.push(Line::blank());
        }
        lines.push(Line::new().push(Span::new(INDENT, t.text())).push(
            Span::new(&group.title, t.text_bright()).with_attrs(Attr::BOLD),
        ));
        lines.push(Line::blank());

        let name_col = group
            .skills
            .iter()
            .map(|s| string_width(&s.name))
            .max()
            .unwrap_or(0)
            + 2;
        let bar_width = SKILL_BAR_WIDTH.min(inner.saturating_sub(name_col + 7).max(8));

        for skill in &group.skills {
            let filled = (skill.level as usize * bar_width).div_ceil(100).min(bar_width);
            let line = Line::new()
                .push(Span::new(INDENT, t.text()))
                .push(Span::new(pad_to_width(&skill.name, name_col), t.text()))
                .push(Span::new("\u{2588}".repeat(filled), t.primary()))
                .push(Span::new("\u{2591}".repeat(bar_width - filled), t.border()))
                .push(Span::new(format!(" {:>3}%", skill.level), t.text_muted()));
            lines.push(line);
        }
    }

    lines.push(Line::blank());
    lines
}

// =============================================================================
// Projects
// =============================================================================

/// Projects: one bordered card per project.
pub fn projects(profile: &Profile, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("Projects", "Most recent work", t);
    let card_width = inner_width(width).min(CARD_MAX_WIDTH);

    for (i, project) in profile.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.extend(project_card(
            &project.title,
            &project.description,
            &project.tags,
            card_width,
            t,
        ));
    }

    lines.push(Line::blank());
    lines
}

fn project_card(
    title: &str,
    description: &str,
    tags: &[String],
    card_width: usize,
    t: &ThemeAccessor,
) -> Vec<Line> {
    let (h, v, tl, tr, br, bl) = BorderStyle::Rounded.chars();
    let border = t.border();
    let body_width = card_width.saturating_sub(4);
    let rule = h.repeat(card_width.saturating_sub(2));

    let boxed = |spans: Vec<Span>| -> Line {
        let content: usize = spans.iter().map(|s| s.width() as usize).sum();
        let padding = body_width.saturating_sub(content);
        let mut line = Line::new()
            .aligned(TextAlign::Center)
            .push(Span::new(format!("{} ", v), border));
        for span in spans {
            line = line.push(span);
        }
        line.push(Span::new(format!("{} {}", " ".repeat(padding), v), border))
            .on(t.surface())
    };

    let mut lines = vec![Line::new()
        .aligned(TextAlign::Center)
        .push(Span::new(format!("{}{}{}", tl, rule, tr), border))
        .on(t.surface())];

    lines.push(boxed(vec![Span::new(
        crate::text::truncate_text(title, body_width, "\u{2026}"),
        t.text_bright(),
    )
    .with_attrs(Attr::BOLD)]));
    for row in wrap_text(description, body_width) {
        lines.push(boxed(vec![Span::new(row, t.text())]));
    }
    if !tags.is_empty() {
        for row in wrap_text(&tags.join(" \u{00b7} "), body_width) {
            lines.push(boxed(vec![Span::new(row, t.text_muted()).with_attrs(Attr::ITALIC)]));
        }
    }

    lines.push(
        Line::new()
            .aligned(TextAlign::Center)
            .push(Span::new(format!("{}{}{}", bl, rule, br), border))
            .on(t.surface()),
    );
    lines
}

// =============================================================================
// Experience
// =============================================================================

/// Experience: the work history timeline.
pub fn experience(profile: &Profile, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("Experience", "My personal journey", t);

    for (i, entry) in profile.experience.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.push(
            Line::new()
                .push(Span::new(INDENT, t.text()))
                .push(Span::new("\u{25c6} ", t.primary()))
                .push(Span::new(&entry.role, t.text_bright()).with_attrs(Attr::BOLD)),
        );
        lines.push(
            Line::new()
                .push(Span::new("    ", t.text()))
                .push(Span::new(&entry.company, t.text_muted()))
                .push(Span::new(" \u{00b7} ", t.border()))
                .push(Span::new(&entry.period, t.text_muted())),
        );
        for row in wrap_text(&entry.summary, inner_width(width).saturating_sub(4)) {
            lines.push(
                Line::new()
                    .push(Span::new("    ", t.text()))
                    .push(Span::new(row, t.text())),
            );
        }
    }

    lines.push(Line::blank());
    lines
}

// =============================================================================
// Services
// =============================================================================

/// Services: icon, title, and a short description each.
pub fn services(profile: &Profile, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("Services", "What I offer", t);

    for (i, service) in profile.services.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.push(
            Line::new()
                .push(Span::new(INDENT, t.text()))
                .push(Span::new(format!("{} ", service.icon), t.text()))
                .push(Span::new(&service.title, t.text_bright()).with_attrs(Attr::BOLD)),
        );
        for row in wrap_text(&service.description, inner_width(width).saturating_sub(4)) {
            lines.push(
                Line::new()
                    .push(Span::new("    ", t.text()))
                    .push(Span::new(row, t.text_muted())),
            );
        }
    }

    lines.push(Line::blank());
    lines
}

// =============================================================================
// Testimonials
// =============================================================================

/// Testimonials: quote, then attribution.
pub fn testimonials(profile: &Profile, width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("Testimonials", "My clients say", t);

    for (i, item) in profile.testimonials.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        let quoted = format!("\u{201c}{}\u{201d}", item.quote);
        for row in wrap_text(&quoted, inner_width(width)) {
            lines.push(
                Line::new()
                    .push(Span::new(INDENT, t.text()))
                    .push(Span::new(row, t.text()).with_attrs(Attr::ITALIC)),
            );
        }
        let mut attribution = Line::new()
            .push(Span::new("    \u{2014} ", t.border()))
            .push(Span::new(&item.author, t.text_bright()));
        if !item.role.is_empty() {
            attribution = attribution.push(Span::new(format!(", {}", item.role), t.text_muted()));
        }
        lines.push(attribution);
    }

    lines.push(Line::blank());
    lines
}

// =============================================================================
// Contact
// =============================================================================

/// Contact: phone/email/location rows, social links, footer.
pub fn contact(profile: &Profile, _width: u16, t: &ThemeAccessor) -> Vec<Line> {
    let mut lines = heading("Contact", "Get in touch", t);

    let row = |label: &str, value: &str| {
        if value.is_empty() {
            return None;
        }
        Some(
            Line::new()
                .push(Span::new(INDENT, t.text()))
                .push(Span::new(pad_to_width(label, 12), t.text_muted()))
                .push(Span::new(value, t.text())),
        )
    };
    for line in [
        row("Phone", &profile.contact.phone),
        row("Email", &profile.contact.email),
        row("Location", &profile.contact.location),
    ]
    .into_iter()
    .flatten()
    {
        lines.push(line);
    }

    if !profile.social.is_empty() {
        lines.push(Line::blank());
        for link in &profile.social {
            lines.push(
                Line::new()
                    .push(Span::new(INDENT, t.text()))
                    .push(Span::new("\u{2197} ", t.text_muted()))
                    .push(
                        Span::new(&link.label, t.primary())
                            .with_attrs(Attr::UNDERLINE)
                            .linked(&link.url),
                    ),
            );
        }
    }

    lines.push(Line::blank());
    lines.push(
        Line::from_span(
            Span::new(format!("\u{00a9} {}", profile.name), t.text_muted()).with_attrs(Attr::DIM),
        )
        .aligned(TextAlign::Center),
    );
    lines.push(Line::blank());
    lines
}

// =============================================================================
// Tests
// =============================================================================
