//! Navigation dots
//!
//! One dot per card, centered under the strip. A dot is active while its card
//! is in view; several can be active at once.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use cardrail_core::VisibilityVector;

use crate::tui::themes::Theme;

const DOT: &str = "●";

/// Columns between neighbouring dots
const DOT_SPACING: u16 = 1;

/// Render `count` dots centered in `area`.
///
/// Returns the cell occupied by each dot, by card index, for hit testing.
pub fn render_dots<const N: usize>(
    buf: &mut Buffer,
    area: Rect,
    count: usize,
    visibility: &VisibilityVector<N>,
    theme: &Theme,
) -> Vec<(usize, Rect)> {
    if count == 0 || area.height == 0 {
        return Vec::new();
    }

    let total = count as u16 * (1 + DOT_SPACING) - DOT_SPACING;
    if total > area.width {
        return Vec::new();
    }

    let start = area.x + (area.width - total) / 2;
    let y = area.y;
    let mut hits = Vec::with_capacity(count);

    for index in 0..count {
        let x = start + index as u16 * (1 + DOT_SPACING);
        let style = if visibility.is_visible(index) {
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dot_inactive_color)
        };
        buf.set_string(x, y, DOT, style);
        hits.push((index, Rect::new(x, y, 1, 1)));
    }

    hits
}
