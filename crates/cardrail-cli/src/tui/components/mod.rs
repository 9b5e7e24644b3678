//! UI components for the cardrail TUI
//!
//! Buffer-based renderers: card strip, edge shadows, navigation dots, hint bar.

pub mod card_strip;
pub mod dots;
pub mod hint_bar;
pub mod shadows;

pub use card_strip::{render_card_strip, strip_height};
pub use dots::render_dots;
pub use hint_bar::render_hint_bar;
pub use shadows::render_edge_shadows;
