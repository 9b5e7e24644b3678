//! Mouse event handling
//!
//! Wheel scrolling over the strip and clicks on the navigation dots.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;

impl App {
    /// Handle mouse events for scrolling and clicking
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            // Vertical wheels scroll sideways too; most mice have no tilt wheel
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.handle_wheel(mouse.column, mouse.row, 1.0);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.handle_wheel(mouse.column, mouse.row, -1.0);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.dot_at(mouse.column, mouse.row) {
                    self.navigate_to(index);
                }
            }
            _ => {}
        }
    }

    fn handle_wheel(&mut self, x: u16, y: u16, direction: f64) {
        if !self.is_over_strip(x, y) {
            return;
        }
        let delta = direction * f64::from(self.config.motion.wheel_step);
        let moved = self
            .with_track(|track| track.scroll_by(delta))
            .unwrap_or(false);
        self.notify_scroll(moved);
    }
}
