//! Terminal User Interface for cardrail

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;
pub mod themes;

// Re-exports
pub use app::App;
pub use themes::THEME_REGISTRY;

/// Restore terminal state - called on panic or unexpected exit
pub fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}
