//! Card strip component
//!
//! Draws every card at its track position and clips the result to the
//! strip viewport. Cards are rendered whole into a scratch buffer first, so a
//! card that is half scrolled out keeps its borders and wrapping intact.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use cardrail_core::{Card, ScrollContainer};

use crate::tui::themes::Theme;

/// Border plus one column of inner padding on each side
const HORIZONTAL_CHROME: u16 = 4;

/// Top and bottom border
const VERTICAL_CHROME: u16 = 2;

/// Width available for text inside a card
fn text_width(card_width: u16) -> usize {
    card_width.saturating_sub(HORIZONTAL_CHROME).max(1) as usize
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Styled text lines of one card, without borders
pub fn card_lines(card: &Card, card_width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let width = text_width(card_width);
    let mut lines = Vec::new();

    let headline_style = Style::default()
        .fg(theme.text_color)
        .bg(theme.headline_bg_color)
        .add_modifier(Modifier::BOLD);
    for row in wrap(&card.headline, width) {
        // Pad so the band spans the full text width
        let pad = width.saturating_sub(row.width());
        let left = pad / 2;
        let padded = format!("{}{}{}", " ".repeat(left), row, " ".repeat(pad - left));
        lines.push(Line::from(Span::styled(padded, headline_style)));
    }

    lines.push(Line::default());
    let body_style = Style::default().fg(theme.text_color);
    for row in wrap(&card.body, width) {
        lines.push(Line::from(Span::styled(row, body_style)).alignment(Alignment::Center));
    }

    if let Some(footnote) = &card.footnote {
        lines.push(Line::default());
        let style = Style::default()
            .fg(theme.dim_color)
            .add_modifier(Modifier::ITALIC);
        for row in wrap(footnote, width) {
            lines.push(Line::from(Span::styled(row, style)).alignment(Alignment::Center));
        }
    }

    if let Some(link) = &card.link {
        lines.push(Line::default());
        let style = Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        for row in wrap(link, width) {
            lines.push(Line::from(Span::styled(row, style)).alignment(Alignment::Center));
        }
    }

    lines
}

/// Height a card needs, borders included
pub fn card_height(card: &Card, card_width: u16, theme: &Theme) -> u16 {
    card_lines(card, card_width, theme).len() as u16 + VERTICAL_CHROME
}

/// Height of the tallest card, so the strip never cuts text off
pub fn strip_height(cards: &[Card], card_width: u16, theme: &Theme) -> u16 {
    cards
        .iter()
        .map(|card| card_height(card, card_width, theme))
        .max()
        .unwrap_or(VERTICAL_CHROME)
}

/// Draw one card filling `area` of `buf`
fn render_card(buf: &mut Buffer, area: Rect, card: &Card, number: usize, theme: &Theme) {
    let badge = Line::from(Span::styled(
        format!(" {} ", number),
        Style::default()
            .fg(theme.bg_color)
            .bg(theme.badge_bg_color)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.card_bg_color))
        .title(badge);

    let inner = block.inner(area);
    block.render(area, buf);

    let content = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    Paragraph::new(card_lines(card, area.width, theme)).render(content, buf);
}

/// Render the strip: background, then each card clipped to `area`.
///
/// Card positions come from the track's geometry and scroll offset; a
/// fractional offset (mid-animation) is rounded to the nearest cell.
pub fn render_card_strip<C: ScrollContainer>(
    buf: &mut Buffer,
    area: Rect,
    cards: &[Card],
    track: &C,
    theme: &Theme,
) {
    buf.set_style(area, Style::default().bg(theme.bg_color));
    if area.width == 0 || area.height == 0 {
        return;
    }

    let scroll = track.scroll_offset();
    for (index, card) in cards.iter().enumerate() {
        let Some(geometry) = track.child_geometry(index) else {
            continue;
        };

        let card_x = (geometry.offset_from_container_start - scroll).round() as i32;
        let card_width = geometry.width.round().max(0.0) as u16;
        let left = area.x as i32 + card_x;
        let right = left + card_width as i32;
        if right <= area.x as i32 || left >= area.right() as i32 || card_width == 0 {
            continue;
        }

        let card_area = Rect::new(0, 0, card_width, area.height);
        let mut scratch = Buffer::empty(card_area);
        render_card(&mut scratch, card_area, card, index + 1, theme);

        for col in 0..card_width {
            let screen_x = left + col as i32;
            if screen_x < area.x as i32 || screen_x >= area.right() as i32 {
                continue;
            }
            for row in 0..area.height {
                let Some(source) = scratch.cell((col, row)) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((screen_x as u16, area.y + row)) {
                    *target = source.clone();
                }
            }
        }
    }
}
