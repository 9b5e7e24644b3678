//! Smooth scroll with exponential ease-out.
//!
//! Each tick covers a fixed fraction of the remaining distance. Once the
//! remainder drops under the settle distance the animation lands exactly on
//! its target, so a settled scroll never leaves fractional noise behind.

use crate::constants::motion::{MIN_SMOOTHING, SETTLE_DISTANCE, SMOOTHING};

/// Offset animator for a single scroll axis
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Where the animation is heading, if it is running
    target: Option<f64>,
    /// Fraction of the remaining distance covered per tick
    speed: f64,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SMOOTHING)
    }
}

impl SmoothScroll {
    /// `speed` is clamped to the range config validation accepts
    pub fn new(speed: f64) -> Self {
        Self {
            target: None,
            speed: speed.clamp(MIN_SMOOTHING, 1.0),
        }
    }

    /// Start (or retarget) the animation
    pub fn start(&mut self, target: f64) {
        self.target = Some(target);
    }

    /// Abandon the animation where it is
    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<f64> {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advance one frame from `current`.
    ///
    /// Returns the new offset, or `None` when idle.
    pub fn step(&mut self, current: f64) -> Option<f64> {
        let target = self.target?;
        let remaining = target - current;

        if remaining.abs() <= SETTLE_DISTANCE {
            self.target = None;
            return Some(target);
        }

        Some(current + remaining * self.speed)
    }
}
