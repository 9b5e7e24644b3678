//! Visibility resolution
//!
//! A card counts as visible when its horizontal midpoint lies strictly inside
//! the visible window. A midpoint sitting exactly on either window edge is
//! not visible.

use crate::metrics::ScrollMetrics;

/// One flag per tracked card, indexed by display position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibilityVector<const N: usize>([bool; N]);

impl<const N: usize> VisibilityVector<N> {
    /// Every card hidden
    pub fn hidden() -> Self {
        Self([false; N])
    }

    pub fn from_flags(flags: [bool; N]) -> Self {
        Self(flags)
    }

    /// Whether card `index` is in view (false when out of range)
    pub fn is_visible(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Indices of the visible cards, in display order
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|visible| *visible)
    }

    pub fn as_array(&self) -> &[bool; N] {
        &self.0
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for VisibilityVector<N> {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Content wider than the viewport
pub fn resolve_overflow(metrics: &ScrollMetrics) -> bool {
    metrics.visible_width < metrics.scrollable_width
}

/// Resolve the midpoint rule for the first `N` items of `metrics`.
///
/// Indices past the measured items resolve to `false`.
pub fn resolve_visibility<const N: usize>(metrics: &ScrollMetrics) -> VisibilityVector<N> {
    let window_start = metrics.scroll_offset;
    let window_end = metrics.window_end();

    let mut flags = [false; N];
    for (flag, item) in flags.iter_mut().zip(&metrics.items) {
        let midpoint = item.midpoint();
        *flag = window_end > midpoint && window_start < midpoint;
    }
    VisibilityVector(flags)
}
