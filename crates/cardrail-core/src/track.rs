//! Card track - the horizontal scroll container behind the carousel
//!
//! Owns the layout of the cards (widths, gutter, padding), the viewport width
//! and the scroll offset. It is the host layout the probe reads from, and the
//! only place the offset changes:
//! - `scroll_by` for manual (wheel) scrolling, followed by an idle snap
//! - `smooth_scroll_to` for programmatic navigation
//! - `set_viewport_width` on resize, which re-clamps the offset
//!
//! Every mutator reports whether the offset actually moved so the host can
//! emit a scroll event for it.

use tracing::{debug, trace};

use crate::animation::SmoothScroll;
use crate::config::{LayoutConfig, MotionConfig};
use crate::constants::motion::SNAP_IDLE_TICKS;
use crate::metrics::{ItemGeometry, ScrollContainer};
use crate::navigation::{centered_offset, ScrollTarget};

/// Horizontal, snap-aligned card track
#[derive(Debug, Clone)]
pub struct CardTrack {
    card_widths: Vec<f64>,
    gutter: f64,
    padding: f64,
    viewport_width: f64,
    offset: f64,
    animation: SmoothScroll,
    snap_idle_ticks: u32,
    /// Ticks left before snapping after a manual scroll
    snap_countdown: Option<u32>,
}

impl CardTrack {
    /// Track of `card_count` equally wide cards
    pub fn new(card_count: usize, card_width: u16, gutter: u16, padding: u16) -> Self {
        Self {
            card_widths: vec![f64::from(card_width); card_count],
            gutter: f64::from(gutter),
            padding: f64::from(padding),
            viewport_width: 0.0,
            offset: 0.0,
            animation: SmoothScroll::default(),
            snap_idle_ticks: SNAP_IDLE_TICKS,
            snap_countdown: None,
        }
    }

    /// Build a track from configuration
    pub fn from_config(card_count: usize, layout: &LayoutConfig, motion: &MotionConfig) -> Self {
        Self::new(card_count, layout.card_width, layout.gutter, layout.padding)
            .with_motion(motion.smoothing, motion.snap_idle_ticks)
    }

    /// Override animation speed and snap delay
    pub fn with_motion(mut self, smoothing: f64, snap_idle_ticks: u32) -> Self {
        self.animation = SmoothScroll::new(smoothing);
        self.snap_idle_ticks = snap_idle_ticks;
        self
    }

    pub fn card_count(&self) -> usize {
        self.card_widths.len()
    }

    /// Width of all cards plus gutters and padding
    pub fn content_width(&self) -> f64 {
        if self.card_widths.is_empty() {
            return 0.0;
        }
        let cards: f64 = self.card_widths.iter().sum();
        let gutters = self.gutter * (self.card_widths.len() - 1) as f64;
        self.padding * 2.0 + cards + gutters
    }

    /// Largest valid scroll offset
    pub fn max_offset(&self) -> f64 {
        (self.scrollable_width() - self.viewport_width).max(0.0)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// True while a snap is scheduled or running
    pub fn is_settling(&self) -> bool {
        self.animation.is_animating() || self.snap_countdown.is_some()
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Set the offset directly, returning whether it moved.
    /// Non-finite offsets are ignored.
    fn place(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            debug!(offset, "ignoring non-finite scroll offset");
            return false;
        }
        let offset = self.clamp(offset);
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }

    /// Resize the viewport. Returns true if the width changed.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let width = width.max(0.0);
        if width == self.viewport_width {
            return false;
        }
        debug!(width, "track viewport resized");
        self.viewport_width = width;
        self.offset = self.clamp(self.offset);

        // A running animation was aimed at the old geometry
        if let Some(target) = self.animation.target() {
            self.animation.start(self.clamp(target));
        }
        true
    }

    /// Manual scroll by `delta` cells. Cancels any running animation and
    /// schedules a snap once scrolling goes idle.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.animation.cancel();
        let moved = self.place(self.offset + delta);
        if self.max_offset() > 0.0 {
            self.snap_countdown = Some(self.snap_idle_ticks);
        }
        moved
    }

    /// Move instantly without animating or snapping
    pub fn jump_to(&mut self, offset: f64) -> bool {
        self.animation.cancel();
        self.snap_countdown = None;
        self.place(offset)
    }

    /// Index of the card whose midpoint is nearest the viewport center.
    ///
    /// Uses the animation target when one is running, so repeated
    /// navigation steps accumulate instead of restarting from the
    /// in-flight position.
    pub fn focused_index(&self) -> Option<usize> {
        let offset = self.animation.target().unwrap_or(self.offset);
        let center = offset + self.viewport_width / 2.0;

        (0..self.card_count())
            .filter_map(|index| self.child_geometry(index).map(|item| (index, item)))
            .min_by(|(_, a), (_, b)| {
                let da = (a.midpoint() - center).abs();
                let db = (b.midpoint() - center).abs();
                da.total_cmp(&db)
            })
            .map(|(index, _)| index)
    }

    /// Offset of the snap point nearest the current position
    pub fn snap_point(&self) -> Option<f64> {
        let index = self.focused_index()?;
        let item = self.child_geometry(index)?;
        Some(centered_offset(
            item,
            self.viewport_width,
            self.scrollable_width(),
        ))
    }

    /// Advance one frame. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        if let Some(next) = self.animation.step(self.offset) {
            trace!(offset = next, "track animation step");
            return self.place(next);
        }

        match self.snap_countdown {
            Some(0) => {
                self.snap_countdown = None;
                if let Some(target) = self.snap_point() {
                    debug!(target, "snapping to nearest card");
                    self.animation.start(target);
                    if let Some(next) = self.animation.step(self.offset) {
                        return self.place(next);
                    }
                }
                false
            }
            Some(remaining) => {
                self.snap_countdown = Some(remaining - 1);
                false
            }
            None => false,
        }
    }
}

impl ScrollContainer for CardTrack {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn visible_width(&self) -> f64 {
        self.viewport_width
    }

    fn scrollable_width(&self) -> f64 {
        self.content_width().max(self.viewport_width)
    }

    fn child_count(&self) -> usize {
        self.card_widths.len()
    }

    fn child_geometry(&self, index: usize) -> Option<ItemGeometry> {
        let width = *self.card_widths.get(index)?;
        let before: f64 = self.card_widths[..index].iter().sum();
        let offset = self.padding + before + self.gutter * index as f64;
        Some(ItemGeometry::new(offset, width))
    }
}

impl ScrollTarget for CardTrack {
    fn smooth_scroll_to(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.snap_countdown = None;
        let target = self.clamp(offset);
        if target == self.offset {
            self.animation.cancel();
            return;
        }
        self.animation.start(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::measure;
    use crate::navigation::scroll_to_item;
    use crate::shadow::{visible_shadow, EdgeShadow};

    /// 4 cards of 30 cells, gutter 2, padding 1 -> content width 128
    fn track(viewport: f64) -> CardTrack {
        let mut track = CardTrack::new(4, 30, 2, 1).with_motion(0.5, 3);
        track.set_viewport_width(viewport);
        track
    }

    fn settle(track: &mut CardTrack) -> usize {
        let mut moves = 0;
        for _ in 0..200 {
            if track.tick() {
                moves += 1;
            }
            if !track.is_settling() {
                break;
            }
        }
        moves
    }

    #[test]
    fn test_geometry() {
        let track = track(60.0);
        assert_eq!(track.content_width(), 128.0);
        assert_eq!(track.scrollable_width(), 128.0);
        assert_eq!(track.max_offset(), 68.0);
        assert_eq!(track.child_geometry(0), Some(ItemGeometry::new(1.0, 30.0)));
        assert_eq!(track.child_geometry(3), Some(ItemGeometry::new(97.0, 30.0)));
        assert_eq!(track.child_geometry(4), None);
    }

    #[test]
    fn test_wide_viewport_has_no_overflow() {
        let track = track(200.0);
        assert_eq!(track.scrollable_width(), 200.0);
        assert_eq!(track.max_offset(), 0.0);
        assert_eq!(visible_shadow(&measure(Some(&track))), EdgeShadow::None);
    }

    #[test]
    fn test_empty_track() {
        let mut track = CardTrack::new(0, 30, 2, 1);
        track.set_viewport_width(50.0);
        assert_eq!(track.content_width(), 0.0);
        assert_eq!(track.focused_index(), None);
        assert!(!track.scroll_by(10.0));
        assert!(!track.tick());
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut track = track(60.0);
        assert!(track.scroll_by(500.0));
        assert_eq!(track.offset(), 68.0);
        assert!(track.scroll_by(-500.0));
        assert_eq!(track.offset(), 0.0);
        assert!(!track.scroll_by(-1.0));
    }

    #[test]
    fn test_non_finite_offsets_are_ignored() {
        let mut track = track(60.0);
        track.jump_to(10.0);

        assert!(!track.jump_to(f64::NAN));
        assert!(!track.scroll_by(f64::INFINITY));
        track.smooth_scroll_to(f64::NEG_INFINITY);
        assert!(!track.is_animating());
        assert_eq!(track.offset(), 10.0);

        let metrics = measure(Some(&track));
        assert_eq!(visible_shadow(&metrics), EdgeShadow::Both);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut track = track(60.0);
        track.jump_to(68.0);
        assert!(track.set_viewport_width(100.0));
        assert_eq!(track.offset(), 28.0);
        assert!(!track.set_viewport_width(100.0));
    }

    #[test]
    fn test_navigation_animates_to_center() {
        let mut track = track(60.0);
        scroll_to_item(&mut track, 1);
        // Nothing moves until the host ticks
        assert_eq!(track.offset(), 0.0);
        assert!(track.is_animating());

        assert!(settle(&mut track) > 1);
        // card 1 midpoint 48 - 30
        assert_eq!(track.offset(), 18.0);
        assert!(!track.is_animating());
    }

    #[test]
    fn test_navigation_to_last_card_reaches_exact_extreme() {
        let mut track = track(60.0);
        scroll_to_item(&mut track, 3);
        settle(&mut track);
        assert_eq!(track.offset(), track.max_offset());
        assert_eq!(visible_shadow(&measure(Some(&track))), EdgeShadow::Left);
    }

    #[test]
    fn test_out_of_range_navigation_keeps_position() {
        let mut track = track(60.0);
        track.jump_to(10.0);
        scroll_to_item(&mut track, 5);
        assert!(!track.is_animating());
        assert_eq!(settle(&mut track), 0);
        assert_eq!(track.offset(), 10.0);
    }

    #[test]
    fn test_manual_scroll_snaps_when_idle() {
        let mut track = track(60.0);
        track.scroll_by(20.0);
        assert_eq!(track.offset(), 20.0);

        // Idle ticks pass without movement
        for _ in 0..3 {
            assert!(!track.tick());
        }
        settle(&mut track);
        // Nearest card to center 50 is card 1 (midpoint 48) -> offset 18
        assert_eq!(track.offset(), 18.0);
    }

    #[test]
    fn test_manual_scroll_interrupts_animation() {
        let mut track = track(60.0);
        scroll_to_item(&mut track, 3);
        track.tick();
        let mid_flight = track.offset();
        assert!(mid_flight > 0.0);

        track.scroll_by(-1.0);
        assert!(!track.is_animating());
        assert_eq!(track.offset(), mid_flight - 1.0);
    }

    #[test]
    fn test_focused_index_follows_animation_target() {
        let mut track = track(60.0);
        scroll_to_item(&mut track, 2);
        assert_eq!(track.focused_index(), Some(2));
        assert_eq!(track.offset(), 0.0);
    }

    #[test]
    fn test_resize_during_animation_retargets() {
        let mut track = track(60.0);
        scroll_to_item(&mut track, 3);
        track.set_viewport_width(120.0);
        settle(&mut track);
        assert_eq!(track.offset(), 8.0);
    }
}
