//! Hint bar - bottom line with position and key bindings

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Key bindings, highest priority first. The jump range follows the
/// number of cards.
fn commands(card_count: usize) -> Vec<(String, &'static str)> {
    let mut commands = vec![
        (" q ".to_string(), "quit "),
        (" ←/→ ".to_string(), "card "),
    ];
    match card_count.min(9) {
        0 => {}
        1 => commands.push((" 1 ".to_string(), "jump ")),
        last => commands.push((format!(" 1-{} ", last), "jump ")),
    }
    commands.push((" Home/End ".to_string(), "ends "));
    commands.push((" wheel ".to_string(), "scroll "));
    commands
}

/// Render the hint bar.
///
/// `position` is the focused card and the card count, shown on the left.
pub fn render_hint_bar(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    card_count: usize,
    position: Option<(usize, usize)>,
) {
    buf.set_style(area, Style::default().bg(theme.bg_color));

    let left = match position {
        Some((focused, total)) => format!(" {}/{} ", focused + 1, total),
        None => String::new(),
    };
    let left_width = left.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    Paragraph::new(Line::from(Span::styled(
        left,
        Style::default().fg(theme.dim_color),
    )))
    .render(chunks[0], buf);

    let spans =
        build_commands_for_width(&commands(card_count), chunks[1].width as usize, theme);
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .render(chunks[1], buf);
}

/// Build command spans that fit in `width`, dropping the lowest priority
/// commands first
fn build_commands_for_width<'a>(
    commands: &[(String, &'static str)],
    width: usize,
    theme: &'a Theme,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc) in commands {
        let cmd_width = key.width() + desc.width();
        if used_width + cmd_width <= width {
            spans.push(Span::styled(
                key.clone(),
                Style::default().bg(theme.border_color).fg(theme.text_color),
            ));
            spans.push(Span::styled(*desc, Style::default().fg(theme.dim_color)));
            used_width += cmd_width;
        }
    }

    spans
}
