//! Input handlers
//!
//! Split from app.rs; each file adds an `impl App` block.

mod hit_test;
mod keyboard;
mod mouse;
