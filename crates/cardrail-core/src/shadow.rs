//! Edge shadow classification
//!
//! A shadow is named after the edge it is drawn on, which is the side that
//! still has hidden content. Being scrolled to the right extreme therefore
//! yields [`EdgeShadow::Left`].

use crate::constants::EXTREME_EPSILON;
use crate::metrics::ScrollMetrics;
use crate::visibility::resolve_overflow;

/// Which edge shadows to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeShadow {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl EdgeShadow {
    /// Shadow drawn on the left edge
    pub fn shows_left(&self) -> bool {
        matches!(self, EdgeShadow::Left | EdgeShadow::Both)
    }

    /// Shadow drawn on the right edge
    pub fn shows_right(&self) -> bool {
        matches!(self, EdgeShadow::Right | EdgeShadow::Both)
    }

    /// Class-style name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeShadow::None => "none",
            EdgeShadow::Left => "left",
            EdgeShadow::Right => "right",
            EdgeShadow::Both => "left-and-right",
        }
    }
}

impl std::fmt::Display for EdgeShadow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn tolerance(metrics: &ScrollMetrics) -> f64 {
    EXTREME_EPSILON * metrics.scrollable_width.abs().max(1.0)
}

/// Scrolled all the way right (overshoot counts)
fn at_right_extreme(metrics: &ScrollMetrics) -> bool {
    metrics.window_end() >= metrics.scrollable_width - tolerance(metrics)
}

/// Scrolled all the way left (overshoot counts)
fn at_left_extreme(metrics: &ScrollMetrics) -> bool {
    metrics.scroll_offset <= tolerance(metrics)
}

/// Raw classification from the two extreme checks.
///
/// When both extremes hold (content fits) this returns [`EdgeShadow::None`],
/// but callers rendering shadows should go through [`visible_shadow`], which
/// also applies the overflow gate.
pub fn classify(metrics: &ScrollMetrics) -> EdgeShadow {
    match (at_left_extreme(metrics), at_right_extreme(metrics)) {
        (true, true) => EdgeShadow::None,
        (_, true) => EdgeShadow::Left,
        (true, false) => EdgeShadow::Right,
        (false, false) => EdgeShadow::Both,
    }
}

/// Shadow to actually render: nothing unless the content overflows
pub fn visible_shadow(metrics: &ScrollMetrics) -> EdgeShadow {
    if resolve_overflow(metrics) {
        classify(metrics)
    } else {
        EdgeShadow::None
    }
}
