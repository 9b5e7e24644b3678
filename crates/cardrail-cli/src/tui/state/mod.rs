//! App state components

mod layout;

pub use layout::LayoutState;
