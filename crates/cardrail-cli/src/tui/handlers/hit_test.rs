//! Hit testing
//!
//! Screen coordinates to carousel elements, using the areas cached by the
//! last layout and render pass.

use ratatui::layout::Position;

use crate::tui::app::App;

impl App {
    /// Card index of the dot at (x, y), if any
    pub fn dot_at(&self, x: u16, y: u16) -> Option<usize> {
        let position = Position::new(x, y);
        self.layout
            .dot_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }

    /// Whether (x, y) lies on the card strip
    pub fn is_over_strip(&self, x: u16, y: u16) -> bool {
        self.layout
            .strip_area
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use cardrail_core::Config;
    use ratatui::layout::Rect;

    use crate::tui::app::App;

    #[test]
    fn test_dot_hit() {
        let mut app = App::new(Config::default(), None);
        app.layout.dot_areas = vec![(0, Rect::new(10, 5, 1, 1)), (1, Rect::new(12, 5, 1, 1))];
        assert_eq!(app.dot_at(12, 5), Some(1));
        assert_eq!(app.dot_at(11, 5), None);
        assert_eq!(app.dot_at(10, 6), None);
    }

    #[test]
    fn test_strip_hit() {
        let mut app = App::new(Config::default(), None);
        assert!(!app.is_over_strip(0, 0));
        app.apply_layout(Rect::new(0, 0, 80, 30));
        let strip = app.layout.strip_area.expect("strip");
        assert!(app.is_over_strip(strip.x, strip.y));
        assert!(!app.is_over_strip(strip.x, strip.bottom()));
    }
}
