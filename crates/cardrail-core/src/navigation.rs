//! Navigation - bring a card into view
//!
//! Fire and forget: the container starts animating and nothing is
//! recomputed here. Visibility catches up from the scroll events the
//! animation produces.

use tracing::debug;

use crate::metrics::{ContainerRef, ItemGeometry, ScrollContainer};

/// A container whose scroll position can be driven programmatically
pub trait ScrollTarget {
    /// Start an animated scroll towards `offset`
    fn smooth_scroll_to(&mut self, offset: f64);
}

/// Offset that centers `item` in a window of `visible_width`, clamped to the
/// scrollable range
pub fn centered_offset(item: ItemGeometry, visible_width: f64, scrollable_width: f64) -> f64 {
    let max_offset = (scrollable_width - visible_width).max(0.0);
    (item.midpoint() - visible_width / 2.0).clamp(0.0, max_offset)
}

/// Smoothly scroll so that card `index` is centered.
///
/// An index with no matching child leaves the scroll position untouched.
pub fn scroll_to_item<C>(container: &mut C, index: usize)
where
    C: ScrollContainer + ScrollTarget + ?Sized,
{
    let Some(item) = container.child_geometry(index) else {
        debug!(index, "scroll_to_item: no such card");
        return;
    };

    let target = centered_offset(
        item,
        container.visible_width(),
        container.scrollable_width(),
    );
    debug!(index, target, "scroll_to_item");
    container.smooth_scroll_to(target);
}

impl<C: ScrollContainer + ScrollTarget> ContainerRef<C> {
    /// [`scroll_to_item`] on the mounted container; no-op while unmounted
    pub fn scroll_to_item(&self, index: usize) {
        if let Some(container) = self.get_mut().as_mut() {
            scroll_to_item(container, index);
        }
    }
}
