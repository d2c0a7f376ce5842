//! App Module - Application lifecycle and event loop.
//!
//! This module provides the entry point for mounting the portfolio.
//! It sets up the terminal, the reactive render effect, and the input
//! loop that drives scrolling, the typewriter pump, and the toggles.
//!
//! # Example
//!
//! ```ignore
//! use devfolio::app;
//!
//! let profile = devfolio::content::Profile::builtin();
//! let handle = app::mount(profile, app::AppOptions::default())?;
//! app::run(&handle)?;
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind, poll,
    read,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size as terminal_size_raw};
use crossterm::tty::IsTty;
use spark_signals::{Signal, effect, signal};

use crate::content::Profile;
use crate::renderer::{Chrome, OutputBuffer, Page, ansi, build_page, paint_frame};
use crate::state::scroll::{self, LINE_SCROLL, WHEEL_SCROLL};
use crate::state::sections::{self, REFERENCE_OFFSET, Section};
use crate::state::toggles;
use crate::state::typewriter::{self, RevealId};
use crate::theme::{current_theme_name, set_theme, theme_for};

/// Rows taken by the nav bar and the status line.
const CHROME_ROWS: u16 = 2;

/// Input poll timeout (~60fps).
const TICK: Duration = Duration::from_millis(16);

// =============================================================================
// Terminal Size
// =============================================================================

thread_local! {
    static TERMINAL_SIZE: Signal<(u16, u16)> = signal((80, 24));
}

/// Current terminal size as (width, height). Reactive.
pub fn terminal_size() -> (u16, u16) {
    TERMINAL_SIZE.with(|s| s.get())
}

/// Update the terminal size signal.
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_SIZE.with(|s| {
        if s.get() != (width, height) {
            s.set((width, height));
        }
    });
}

/// Query the real terminal and seed the size signal.
fn detect_terminal_size() {
    if let Ok((w, h)) = terminal_size_raw() {
        set_terminal_size(w, h);
    }
}

/// Content rows available below the nav and above the status line.
fn viewport_rows(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}

// =============================================================================
// Terminal Guard
// =============================================================================

/// RAII guard for terminal state.
///
/// Enters raw mode (when stdin is a terminal) and the alternate screen on
/// acquire; restores both on drop, so the shell comes back intact even when
/// the loop errors out.
struct TerminalGuard {
    raw: bool,
}

impl TerminalGuard {
    fn acquire(title: &str) -> io::Result<Self> {
        // Piped stdin cannot go raw; render without keyboard input then.
        let raw = io::stdin().is_tty();
        if raw {
            enable_raw_mode()?;
        }
        let mut out = OutputBuffer::new();
        ansi::enter_alt_screen(&mut out)?;
        ansi::cursor_hide(&mut out)?;
        ansi::clear_screen(&mut out)?;
        ansi::set_title(&mut out, title)?;
        out.flush_stdout()?;
        Ok(Self { raw })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = OutputBuffer::new();
        let _ = ansi::reset(&mut out);
        let _ = ansi::cursor_show(&mut out);
        let _ = ansi::exit_alt_screen(&mut out);
        let _ = out.flush_stdout();
        if self.raw {
            let _ = disable_raw_mode();
        }
    }
}

// =============================================================================
// Options and Handle
// =============================================================================

/// Mount-time options, resolved from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppOptions {
    /// Force dark (`Some(true)`) or light (`Some(false)`) mode.
    /// `None` follows the terminal's reported palette.
    pub dark_mode: Option<bool>,
}

/// Handle returned by mount() that allows unmounting.
pub struct AppHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    unsubscribe_scroll: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    page: Rc<RefCell<Page>>,
    profile: Rc<Profile>,
    reveal: RevealId,
    guard: Option<TerminalGuard>,
}

impl AppHandle {
    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);
        typewriter::cancel_reveal(self.reveal);

        if let Some(unsubscribe) = self.unsubscribe_scroll.take() {
            unsubscribe();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        self.guard.take();
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe_scroll.take() {
            unsubscribe();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Mount the portfolio.
///
/// This sets up:
/// 1. Dark mode (explicit option, or detected from `COLORFGBG`) and the
///    matching theme, with the profile's accent applied over it
/// 2. The hero typewriter reveal
/// 3. Raw mode + alternate screen (restored via the handle)
/// 4. The scroll subscription that keeps the active section current
/// 5. The ONE render effect: any tracked signal change repaints the frame
///
/// Returns an AppHandle for ticking and cleanup.
pub fn mount(profile: Profile, options: AppOptions) -> io::Result<AppHandle> {
    let profile = Rc::new(profile);

    match options.dark_mode {
        Some(dark) => toggles::set_dark_mode(dark),
        None => toggles::init_dark_mode_from_env(),
    }
    set_theme(&theme_for(toggles::dark_mode()).with_accent(profile.accent.as_deref()));

    let reveal = typewriter::start_reveal(
        &profile.typewriter_text,
        Duration::from_millis(profile.type_delay_ms),
    );
    // Captured once: the render effect reads the signal, never the registry.
    let typed_signal =
        typewriter::reveal_signal(reveal).expect("reveal registered by start_reveal");

    let guard = TerminalGuard::acquire(&profile.brand)?;
    detect_terminal_size();

    let page = Rc::new(RefCell::new(Page::default()));
    let running = Arc::new(AtomicBool::new(true));

    // The ONE render effect. Runs once now, then on every tracked change:
    // terminal size, typed prefix, menu, active section, scroll, theme slots.
    let profile_for_render = profile.clone();
    let page_for_render = page.clone();
    let running_for_render = running.clone();
    let mut out = OutputBuffer::new();
    let stop_effect = effect(move || {
        if !running_for_render.load(Ordering::SeqCst) {
            return;
        }

        let (width, height) = terminal_size();
        let typed = typed_signal.get();
        let complete = typed == profile_for_render.typewriter_text;
        let menu_open = toggles::menu_signal().get();
        let active = sections::active_section();
        let offset = scroll::scroll_offset();

        *page_for_render.borrow_mut() = build_page(&profile_for_render, &typed, complete, width);
        let page = page_for_render.borrow();

        let chrome = Chrome {
            brand: profile_for_render.brand.clone(),
            sections: profile_for_render.sections(),
            active,
            menu_open,
            theme_name: current_theme_name(),
        };

        out.clear();
        let _ = paint_frame(&mut out, &page, &chrome, width, height, offset);
        let _ = out.flush_stdout();
    });

    // Scroll drives the active section. The probe takes a fresh short borrow
    // per call, so the page is free again by the time the signal commits.
    let page_for_probe = page.clone();
    let update_active = move |offset: u16| {
        sections::update_active_section(
            |section| page_for_probe.borrow().bounds(section, offset),
            REFERENCE_OFFSET,
        );
    };

    // Evaluate once at mount so the highlight is correct before any scroll.
    update_active(scroll::scroll_offset());
    let unsubscribe_scroll = scroll::on_scroll(update_active);

    Ok(AppHandle {
        stop_effect: Some(Box::new(stop_effect)),
        unsubscribe_scroll: Some(Box::new(unsubscribe_scroll)),
        running,
        page,
        profile,
        reveal,
        guard: Some(guard),
    })
}

// =============================================================================
// Actions
// =============================================================================

/// What a key press means, independent of how it gets applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    /// Close the menu if open, otherwise quit.
    Back,
    ScrollLine(i32),
    ScrollPage(i32),
    ScrollTop,
    ScrollBottom,
    Jump(Section),
    ToggleTheme,
    ToggleMenu,
}

/// Map a key event to an action. Release events map to nothing.
fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollLine(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollLine(-1)),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Action::ScrollPage(1)),
        KeyCode::PageUp => Some(Action::ScrollPage(-1)),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),
        KeyCode::Char('d') => Some(Action::ToggleTheme),
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        KeyCode::Char(c @ '1'..='8') => {
            Section::ALL.iter().find(|s| s.jump_key() == c).copied().map(Action::Jump)
        }
        _ => None,
    }
}

/// Apply an action against the live state.
fn apply_action(handle: &AppHandle, action: Action) {
    let (_, height) = terminal_size();
    let viewport = viewport_rows(height);
    let max = scroll::max_scroll(handle.page.borrow().height(), viewport);

    match action {
        Action::Quit => handle.stop(),
        Action::Back => {
            if toggles::is_menu_open() {
                toggles::close_menu();
            } else {
                handle.stop();
            }
        }
        Action::ScrollLine(direction) => {
            scroll::scroll_by(direction * LINE_SCROLL as i32, max);
        }
        Action::ScrollPage(direction) => {
            scroll::scroll_page(direction, viewport, max);
        }
        Action::ScrollTop => scroll::scroll_to_top(),
        Action::ScrollBottom => scroll::scroll_to_bottom(max),
        Action::Jump(section) => {
            let top = handle.page.borrow().anchor_top(section);
            if let Some(top) = top {
                scroll::set_scroll_offset(top, max);
            }
            toggles::close_menu();
        }
        Action::ToggleTheme => {
            let dark = toggles::toggle_dark_mode();
            set_theme(&theme_for(dark).with_accent(handle.profile.accent.as_deref()));
        }
        Action::ToggleMenu => {
            toggles::toggle_menu();
        }
    }
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Polls input for one tick, applies whatever arrived, then pumps the
/// typewriter so the reveal advances even while no keys are pressed.
/// Returns `Ok(false)` when the application should stop.
pub fn tick(handle: &AppHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if poll(TICK)? {
        match read()? {
            CrosstermEvent::Key(key) => {
                if let Some(action) = action_for(&key) {
                    apply_action(handle, action);
                }
            }
            CrosstermEvent::Mouse(mouse) => {
                let (_, height) = terminal_size();
                let max =
                    scroll::max_scroll(handle.page.borrow().height(), viewport_rows(height));
                match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        scroll::scroll_by(-(WHEEL_SCROLL as i32), max);
                    }
                    MouseEventKind::ScrollDown => {
                        scroll::scroll_by(WHEEL_SCROLL as i32, max);
                    }
                    _ => {}
                }
            }
            CrosstermEvent::Resize(w, h) => {
                set_terminal_size(w, h);
                // Keep the offset valid for the new viewport
                let max = scroll::max_scroll(handle.page.borrow().height(), viewport_rows(h));
                scroll::set_scroll_offset(scroll::scroll_offset(), max);
            }
            _ => {}
        }
    }

    typewriter::revealed_text(handle.reveal);

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &AppHandle) -> io::Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
