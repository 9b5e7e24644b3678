//! Derived carousel state
//!
//! Overflow, visibility and shadow are always recomputed together from one
//! snapshot, so the three can never disagree about where the track is.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::events::{EventBus, HostEvent, Subscription};
use crate::metrics::{ContainerRef, ScrollContainer, ScrollMetrics};
use crate::shadow::{visible_shadow, EdgeShadow};
use crate::visibility::{resolve_overflow, resolve_visibility, VisibilityVector};

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState<const N: usize> {
    /// Content wider than the viewport; gates dots and shadows
    pub overflow: bool,
    /// Which dots are active
    pub visibility: VisibilityVector<N>,
    /// Which shadow overlay to draw (already gated by `overflow`)
    pub shadow: EdgeShadow,
}

impl<const N: usize> CarouselState<N> {
    /// Derive the full state from a single snapshot
    pub fn derive(metrics: &ScrollMetrics) -> Self {
        Self {
            overflow: resolve_overflow(metrics),
            visibility: resolve_visibility(metrics),
            shadow: visible_shadow(metrics),
        }
    }

    /// Whether the dot row should be drawn at all
    pub fn shows_dots(&self) -> bool {
        self.overflow
    }
}

/// Keeps a [`CarouselState`] current by listening to host events.
///
/// Each event triggers exactly one measurement of the container; the
/// snapshot is shared by every derivation. The listener is detached when
/// the watcher drops.
#[derive(Debug)]
pub struct CarouselWatcher<const N: usize> {
    state: Rc<Cell<CarouselState<N>>>,
    recomputes: Rc<Cell<u64>>,
    _subscription: Subscription,
}

impl<const N: usize> CarouselWatcher<N> {
    /// Start watching `container` through `bus`.
    ///
    /// The state is derived once immediately; an unmounted container yields
    /// the neutral state.
    pub fn attach<C>(bus: &EventBus, container: ContainerRef<C>) -> Self
    where
        C: ScrollContainer + 'static,
    {
        let state = Rc::new(Cell::new(CarouselState::derive(&container.measure())));
        let recomputes = Rc::new(Cell::new(0));

        let published = Rc::clone(&state);
        let counter = Rc::clone(&recomputes);
        let subscription = bus.subscribe(move |event: HostEvent| {
            let metrics = container.measure();
            let next = CarouselState::derive(&metrics);
            if next != published.get() {
                debug!(
                    ?event,
                    overflow = next.overflow,
                    visible = ?next.visibility.as_array(),
                    shadow = %next.shadow,
                    "carousel state changed"
                );
            }
            published.set(next);
            counter.set(counter.get() + 1);
        });

        Self {
            state,
            recomputes,
            _subscription: subscription,
        }
    }

    /// Latest published state
    pub fn state(&self) -> CarouselState<N> {
        self.state.get()
    }

    /// Number of recomputations performed so far
    pub fn recompute_count(&self) -> u64 {
        self.recomputes.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ItemGeometry;
    use crate::navigation::ScrollTarget;
    use crate::track::CardTrack;

    /// Container with the dimensions used throughout the examples:
    /// four 237-wide cards, 948 total.
    struct Strip {
        offset: f64,
        visible: f64,
        reads: Rc<Cell<usize>>,
    }

    impl ScrollContainer for Strip {
        fn scroll_offset(&self) -> f64 {
            self.reads.set(self.reads.get() + 1);
            self.offset
        }

        fn visible_width(&self) -> f64 {
            self.visible
        }

        fn scrollable_width(&self) -> f64 {
            self.visible.max(948.0)
        }

        fn child_count(&self) -> usize {
            4
        }

        fn child_geometry(&self, index: usize) -> Option<ItemGeometry> {
            (index < 4).then(|| ItemGeometry::new(index as f64 * 237.0, 237.0))
        }
    }

    impl ScrollTarget for Strip {
        fn smooth_scroll_to(&mut self, offset: f64) {
            self.offset = offset;
        }
    }

    fn strip(offset: f64, visible: f64) -> Strip {
        Strip {
            offset,
            visible,
            reads: Rc::new(Cell::new(0)),
        }
    }

    fn state_at(offset: f64, visible: f64) -> CarouselState<4> {
        let container = strip(offset, visible);
        CarouselState::derive(&crate::metrics::measure(Some(&container)))
    }

    #[test]
    fn test_scenario_fits() {
        let state = state_at(0.0, 948.0);
        assert!(!state.overflow);
        assert!(!state.shows_dots());
        assert_eq!(state.shadow, EdgeShadow::None);
    }

    #[test]
    fn test_scenario_start() {
        let state = state_at(0.0, 400.0);
        assert!(state.overflow);
        assert_eq!(state.shadow, EdgeShadow::Right);
        assert!(state.visibility.is_visible(0));
        assert!(!state.visibility.is_visible(2));
    }

    #[test]
    fn test_scenario_end() {
        let state = state_at(548.0, 400.0);
        assert_eq!(state.shadow, EdgeShadow::Left);
        assert!(state.visibility.is_visible(3));
    }

    #[test]
    fn test_scenario_middle() {
        assert_eq!(state_at(200.0, 400.0).shadow, EdgeShadow::Both);
    }

    #[test]
    fn test_unmounted_watcher_is_neutral() {
        let bus = EventBus::new();
        let slot: ContainerRef<Strip> = ContainerRef::new();
        let watcher = CarouselWatcher::<4>::attach(&bus, slot);

        bus.emit(HostEvent::Resized);
        assert_eq!(watcher.state(), CarouselState::default());
        assert_eq!(watcher.recompute_count(), 1);
    }

    #[test]
    fn test_watcher_tracks_events() {
        let bus = EventBus::new();
        let slot: ContainerRef<Strip> = ContainerRef::new();
        let watcher = CarouselWatcher::<4>::attach(&bus, slot.clone());

        slot.mount(strip(0.0, 400.0));
        // No event yet: the published state is still the pre-mount one
        assert!(!watcher.state().overflow);

        bus.emit(HostEvent::Mounted);
        assert_eq!(watcher.state().shadow, EdgeShadow::Right);

        slot.scroll_to_item(3);
        bus.emit(HostEvent::Scrolled);
        assert_eq!(watcher.state().shadow, EdgeShadow::Left);
        assert_eq!(watcher.recompute_count(), 2);
    }

    #[test]
    fn test_one_measurement_per_event() {
        let bus = EventBus::new();
        let container = strip(200.0, 400.0);
        let reads = Rc::clone(&container.reads);
        let slot = ContainerRef::mounted(container);
        let _watcher = CarouselWatcher::<4>::attach(&bus, slot);

        reads.set(0);
        for _ in 0..10 {
            bus.emit(HostEvent::Scrolled);
        }
        assert_eq!(reads.get(), 10);
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let bus = EventBus::new();
        let slot = ContainerRef::mounted(strip(200.0, 400.0));
        let watcher = CarouselWatcher::<4>::attach(&bus, slot);

        bus.emit(HostEvent::Scrolled);
        let first = watcher.state();
        for _ in 0..50 {
            bus.emit(HostEvent::Scrolled);
            bus.emit(HostEvent::Resized);
        }
        assert_eq!(watcher.state(), first);
    }

    #[test]
    fn test_dropping_watcher_detaches() {
        let bus = EventBus::new();
        let slot = ContainerRef::mounted(strip(0.0, 400.0));
        let watcher = CarouselWatcher::<4>::attach(&bus, slot);
        assert_eq!(bus.listener_count(), 1);

        drop(watcher);
        assert_eq!(bus.listener_count(), 0);
        bus.emit(HostEvent::Scrolled);
    }

    #[test]
    fn test_track_navigation_is_eventually_consistent() {
        let bus = EventBus::new();
        let slot = ContainerRef::mounted(CardTrack::new(4, 30, 2, 1).with_motion(0.5, 3));
        if let Some(track) = slot.get_mut().as_mut() {
            track.set_viewport_width(60.0);
        }
        let watcher = CarouselWatcher::<4>::attach(&bus, slot.clone());
        bus.emit(HostEvent::Mounted);
        assert_eq!(watcher.state().shadow, EdgeShadow::Right);

        slot.scroll_to_item(3);
        // Nothing recomputed until the animation produces scroll events
        assert_eq!(watcher.state().shadow, EdgeShadow::Right);

        for _ in 0..100 {
            let moved = slot
                .get_mut()
                .as_mut()
                .map(|track| track.tick())
                .unwrap_or(false);
            if moved {
                bus.emit(HostEvent::Scrolled);
            }
        }

        let state = watcher.state();
        assert_eq!(state.shadow, EdgeShadow::Left);
        assert_eq!(state.visibility.as_array(), &[false, false, true, true]);
    }
}
