//! Edge shadow overlays
//!
//! Fades the outermost columns of the strip into the background on the
//! side(s) named by the shadow state, hinting that more cards are hidden
//! there. Rgb colors are blended in linear space; named colors fall back to
//! the DIM modifier.

use palette::{LinSrgb, Mix, Srgb};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
};

use cardrail_core::EdgeShadow;

use crate::tui::themes::Theme;

/// Columns covered by one shadow
pub const SHADOW_WIDTH: u16 = 4;

/// Blend strength at the very edge
const EDGE_STRENGTH: f32 = 0.85;

/// Mix `color` towards `toward` by `factor` (0 = unchanged, 1 = `toward`)
pub fn blend(color: Color, toward: Color, factor: f32) -> Color {
    match (color, toward) {
        _ if factor <= 0.0 => color,
        _ if factor >= 1.0 => toward,
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let from: LinSrgb<f32> = Srgb::new(r1, g1, b1).into_format::<f32>().into_linear();
            let to: LinSrgb<f32> = Srgb::new(r2, g2, b2).into_format::<f32>().into_linear();
            let mixed: Srgb<u8> = Srgb::<f32>::from_linear(from.mix(to, factor.clamp(0.0, 1.0)))
                .into_format::<u8>();
            Color::Rgb(mixed.red, mixed.green, mixed.blue)
        }
        _ if factor >= 0.5 => toward,
        _ => color,
    }
}

/// Strength of the shadow `distance` columns in from the edge
fn strength(distance: u16, width: u16) -> f32 {
    EDGE_STRENGTH * (width - distance) as f32 / width as f32
}

fn shade_column(buf: &mut Buffer, x: u16, area: Rect, factor: f32, theme: &Theme) {
    for y in area.top()..area.bottom() {
        let Some(cell) = buf.cell_mut((x, y)) else {
            continue;
        };
        let fg = blend(cell.fg, theme.bg_color, factor);
        let bg = blend(cell.bg, theme.bg_color, factor);
        cell.set_fg(fg).set_bg(bg);
        if !matches!(theme.bg_color, Color::Rgb(..)) {
            cell.modifier.insert(Modifier::DIM);
        }
    }
}

/// Overlay the shadows for `shadow` on `area`
pub fn render_edge_shadows(buf: &mut Buffer, area: Rect, shadow: EdgeShadow, theme: &Theme) {
    let width = SHADOW_WIDTH.min(area.width / 2);
    if width == 0 {
        return;
    }

    for distance in 0..width {
        let factor = strength(distance, width);
        if shadow.shows_left() {
            shade_column(buf, area.left() + distance, area, factor, theme);
        }
        if shadow.shows_right() {
            shade_column(buf, area.right() - 1 - distance, area, factor, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use ratatui::style::Style;

    fn painted(area: Rect, color: Color) -> Buffer {
        let mut buf = Buffer::empty(area);
        buf.set_style(area, Style::default().bg(color));
        buf
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(200, 100, 50);
        let b = Color::Rgb(0, 0, 0);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(Color::Red, Color::Blue, 0.9), Color::Blue);
        assert_eq!(blend(Color::Red, Color::Blue, 0.1), Color::Red);
    }

    #[test]
    fn test_none_leaves_buffer_untouched() {
        let theme = THEME_REGISTRY.get_or_default("cardrail");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = painted(area, Color::Rgb(255, 255, 255));
        let before = buf.clone();
        render_edge_shadows(&mut buf, area, EdgeShadow::None, theme);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_left_shadow_only_touches_left_edge() {
        let theme = THEME_REGISTRY.get_or_default("cardrail");
        let area = Rect::new(0, 0, 20, 3);
        let white = Color::Rgb(255, 255, 255);
        let mut buf = painted(area, white);
        render_edge_shadows(&mut buf, area, EdgeShadow::Left, theme);

        let bg = |x: u16| buf.cell((x, 1)).map(|c| c.bg);
        assert_ne!(bg(0), Some(white));
        assert_ne!(bg(SHADOW_WIDTH - 1), Some(white));
        assert_eq!(bg(SHADOW_WIDTH), Some(white));
        assert_eq!(bg(19), Some(white));
    }

    #[test]
    fn test_shadow_fades_inward() {
        let theme = THEME_REGISTRY.get_or_default("cardrail");
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = painted(area, Color::Rgb(255, 255, 255));
        render_edge_shadows(&mut buf, area, EdgeShadow::Right, theme);

        let red = |x: u16| match buf.cell((x, 0)).map(|c| c.bg) {
            Some(Color::Rgb(r, _, _)) => r,
            _ => 0,
        };
        // Darker at the edge, lighter further in
        assert!(red(19) < red(18));
        assert!(red(18) < red(17));
        assert_eq!(red(19 - SHADOW_WIDTH), 255);
    }

    #[test]
    fn test_both_on_tiny_area() {
        let theme = THEME_REGISTRY.get_or_default("cardrail");
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = painted(area, Color::Rgb(255, 255, 255));
        let before = buf.clone();
        render_edge_shadows(&mut buf, area, EdgeShadow::Both, theme);
        assert_eq!(buf, before);
    }
}
