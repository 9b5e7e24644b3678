//! Layout State - cached screen areas
//!
//! Recomputed on every resize, used for rendering and mouse hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Lines reserved for the title and the gap under it
const HEADER_HEIGHT: u16 = 2;

/// Lines between the cards and the dot row
const DOTS_GAP: u16 = 1;

/// Cached layout areas for hit testing and rendering
#[derive(Debug, Default, Clone)]
pub struct LayoutState {
    /// Title line
    pub header_area: Option<Rect>,
    /// Card strip viewport (the scroll container)
    pub strip_area: Option<Rect>,
    /// Row holding the navigation dots
    pub dots_row: Option<Rect>,
    /// Individual dot cells from the last frame, by card index
    pub dot_areas: Vec<(usize, Rect)>,
    /// Key hint bar
    pub hint_area: Option<Rect>,
}

impl LayoutState {
    /// Create a new empty layout state
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `screen` for cards of `card_height` lines
    pub fn compute(&mut self, screen: Rect, card_height: u16) -> &Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(card_height),
                Constraint::Length(DOTS_GAP),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(screen);

        self.header_area = Some(chunks[0]);
        self.strip_area = Some(chunks[1]);
        self.dots_row = Some(chunks[3]);
        self.hint_area = Some(chunks[5]);
        self.dot_areas.clear();
        self
    }

    /// Width of the strip viewport, 0 before the first layout
    pub fn strip_width(&self) -> u16 {
        self.strip_area.map(|area| area.width).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_splits_screen() {
        let mut layout = LayoutState::new();
        layout.compute(Rect::new(0, 0, 80, 30), 12);

        let strip = layout.strip_area.expect("strip");
        assert_eq!(strip, Rect::new(0, 2, 80, 12));
        assert_eq!(layout.dots_row, Some(Rect::new(0, 15, 80, 1)));
        assert_eq!(layout.hint_area, Some(Rect::new(0, 29, 80, 1)));
        assert_eq!(layout.strip_width(), 80);
    }

    #[test]
    fn test_empty_before_layout() {
        let layout = LayoutState::new();
        assert_eq!(layout.strip_width(), 0);
        assert!(layout.dot_areas.is_empty());
    }
}
