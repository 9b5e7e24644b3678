//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Name of the theme used when none (or an unknown one) is requested
pub const DEFAULT_THEME: &str = "cardrail";

/// Global registry of built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Colors used by the carousel
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    /// Screen background, also the color shadows fade into
    pub bg_color: Color,
    pub card_bg_color: Color,
    pub headline_bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    /// Links and the active dot
    pub accent_color: Color,
    pub border_color: Color,
    pub badge_bg_color: Color,
    pub dot_inactive_color: Color,
}
