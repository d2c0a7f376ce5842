//! State Module - Runtime state management systems
//!
//! This module contains the reactive state systems that power the page:
//!
//! - **Typewriter** - Grapheme-by-grapheme text reveal with its own pacing
//! - **Sections** - Which section of the page is considered active
//! - **Scroll** - Document offset, clamped operations, change subscriptions
//! - **Toggles** - Dark mode and the navigation menu overlay

pub mod scroll;
pub mod sections;
pub mod toggles;
pub mod typewriter;

pub use scroll::*;
pub use sections::*;
pub use toggles::*;
pub use typewriter::*;
