//! Renderer Module - From profile content to terminal escape codes.
//!
//! The renderer is split into layers:
//! - `ansi` - Raw escape sequence writers (cursor, colors, attributes)
//! - `line` - Styled span/line model the builders produce
//! - `sections` - Per-section line builders (hero, skills, cards, ...)
//! - `page` - Assembles sections into one document with anchors
//! - `frame` - Paints the visible slice plus nav and status chrome
//!
//! Builders are pure functions from content to `Vec<Line>`, so everything
//! above the frame painter is testable without a terminal.

pub mod ansi;
pub mod frame;
pub mod line;
pub mod page;
pub mod sections;

pub use frame::{Chrome, OutputBuffer, paint_frame, NAV_COLLAPSE_WIDTH};
pub use line::{Line, Span};
pub use page::{build_page, Anchor, Page};
