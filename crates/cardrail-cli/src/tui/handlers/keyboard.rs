//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.step_card(-1),
            KeyCode::Right | KeyCode::Char('l') => self.step_card(1),
            KeyCode::Home => self.navigate_to(0),
            KeyCode::End => {
                let last = self.config.cards.len().saturating_sub(1);
                self.navigate_to(last);
            }
            // Digits are 1-based; ones past the last card are ignored downstream
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.navigate_to(index);
            }
            _ => {}
        }
    }

    /// Move focus by `delta` cards, stopping at either end
    fn step_card(&mut self, delta: isize) {
        let Some(focused) = self.focused_index() else {
            return;
        };
        let last = self.config.cards.len().saturating_sub(1) as isize;
        let next = (focused as isize + delta).clamp(0, last) as usize;
        if next != focused {
            self.navigate_to(next);
        }
    }
}
