//! Scroll metrics - one snapshot of a horizontal scroll container
//!
//! The probe reads the container's live layout on demand and never caches.
//! Every consumer of a single event works from the same snapshot.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Position and width of one tracked card, relative to the content start
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemGeometry {
    pub offset_from_container_start: f64,
    pub width: f64,
}

impl ItemGeometry {
    pub fn new(offset_from_container_start: f64, width: f64) -> Self {
        Self {
            offset_from_container_start,
            width,
        }
    }

    /// Horizontal center of the item
    pub fn midpoint(&self) -> f64 {
        self.offset_from_container_start + self.width / 2.0
    }
}

/// Raw measurements of the scroll container at one instant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the content start
    pub scroll_offset: f64,
    /// Width of the viewport
    pub visible_width: f64,
    /// Total width of the content (never less than the viewport)
    pub scrollable_width: f64,
    /// Tracked children in display order
    pub items: Vec<ItemGeometry>,
}

impl ScrollMetrics {
    /// Neutral snapshot used while no container is mounted
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// True for the "no data yet" snapshot
    pub fn is_zeroed(&self) -> bool {
        self.scroll_offset == 0.0
            && self.visible_width == 0.0
            && self.scrollable_width == 0.0
            && self.items.is_empty()
    }

    /// Right edge of the visible window
    pub fn window_end(&self) -> f64 {
        self.scroll_offset + self.visible_width
    }
}

/// Layout boundary a scroll container exposes to the probe
pub trait ScrollContainer {
    /// Current horizontal scroll offset
    fn scroll_offset(&self) -> f64;

    /// Rendered (visible) width
    fn visible_width(&self) -> f64;

    /// Total content width
    fn scrollable_width(&self) -> f64;

    /// Number of children in display order
    fn child_count(&self) -> usize;

    /// Geometry of the child at `index`, if it exists
    fn child_geometry(&self, index: usize) -> Option<ItemGeometry>;
}

/// Read a fresh snapshot from `container`.
///
/// An unmounted container yields [`ScrollMetrics::zeroed`].
pub fn measure<C: ScrollContainer + ?Sized>(container: Option<&C>) -> ScrollMetrics {
    let Some(container) = container else {
        return ScrollMetrics::zeroed();
    };

    let items = (0..container.child_count())
        .filter_map(|index| container.child_geometry(index))
        .collect();

    ScrollMetrics {
        scroll_offset: container.scroll_offset(),
        visible_width: container.visible_width(),
        scrollable_width: container.scrollable_width(),
        items,
    }
}

/// Shared, possibly-unmounted handle to a scroll container
///
/// Stays empty until the host mounts the container and is emptied again on
/// teardown, so every reader has to cope with "not mounted yet".
#[derive(Debug)]
pub struct ContainerRef<C>(Rc<RefCell<Option<C>>>);

impl<C> Clone for ContainerRef<C> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<C> Default for ContainerRef<C> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<C> ContainerRef<C> {
    /// Create an empty (unmounted) handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is already mounted
    pub fn mounted(container: C) -> Self {
        Self(Rc::new(RefCell::new(Some(container))))
    }

    /// Mount `container`, replacing any previous one
    pub fn mount(&self, container: C) {
        *self.0.borrow_mut() = Some(container);
    }

    /// Unmount and return the container
    pub fn unmount(&self) -> Option<C> {
        self.0.borrow_mut().take()
    }

    pub fn is_mounted(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Borrow the slot
    pub fn get(&self) -> Ref<'_, Option<C>> {
        self.0.borrow()
    }

    /// Mutably borrow the slot
    pub fn get_mut(&self) -> RefMut<'_, Option<C>> {
        self.0.borrow_mut()
    }
}

impl<C: ScrollContainer> ContainerRef<C> {
    /// Take one snapshot of whatever is currently mounted
    pub fn measure(&self) -> ScrollMetrics {
        measure(self.0.borrow().as_ref())
    }
}
