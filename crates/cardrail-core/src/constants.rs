//! Constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Number of cards whose visibility is tracked (one navigation dot each)
pub const TRACKED_CARDS: usize = 4;

/// Relative tolerance when comparing a scroll position against an extreme
pub const EXTREME_EPSILON: f64 = 1e-6;

/// Layout defaults, in terminal cells
pub mod layout {
    /// Card width including its border
    pub const CARD_WIDTH: u16 = 30;

    /// Empty columns between neighbouring cards
    pub const GUTTER: u16 = 2;

    /// Empty columns before the first and after the last card
    pub const PADDING: u16 = 1;

    /// Narrowest card that can still hold a headline
    pub const MIN_CARD_WIDTH: u16 = 8;
}

/// Motion defaults
pub mod motion {
    /// Fraction of the remaining distance covered per tick
    pub const SMOOTHING: f64 = 0.3;

    /// Slowest accepted smoothing
    pub const MIN_SMOOTHING: f64 = 0.05;

    /// Distance (in cells) under which an animation lands on its target
    pub const SETTLE_DISTANCE: f64 = 0.25;

    /// Idle ticks after a manual scroll before snapping to the nearest card
    pub const SNAP_IDLE_TICKS: u32 = 8;

    /// Cells scrolled per mouse wheel notch
    pub const WHEEL_STEP: u16 = 4;

    /// Frame interval in milliseconds
    pub const TICK_MS: u64 = 16;
}

/// Config file location
pub mod paths {
    /// Directory name under the platform config/data dirs
    pub const APP_DIR_NAME: &str = "cardrail";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Log file name
    pub const LOG_FILE_NAME: &str = "cardrail.log";
}
