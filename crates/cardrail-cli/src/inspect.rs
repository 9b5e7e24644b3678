//! Headless inspection
//!
//! Lays the configured cards out in a viewport of a given width and reports
//! what the carousel would show, without touching the terminal. Goes through
//! the same event bus and watcher as the TUI.

use std::fmt;

use anyhow::{bail, Result};
use tracing::debug;

use cardrail_core::constants::TRACKED_CARDS;
use cardrail_core::{
    CardTrack, CarouselState, CarouselWatcher, Config, ContainerRef, EventBus, HostEvent,
    ScrollContainer,
};

/// Frames to wait for a navigation to settle before giving up
const MAX_SETTLE_TICKS: usize = 10_000;

/// What to do before reporting
#[derive(Debug, Clone, Default)]
pub struct InspectRequest {
    pub viewport: u16,
    /// Jump straight to this offset
    pub offset: Option<f64>,
    /// Then navigate to this card and let the animation finish
    pub item: Option<usize>,
}

/// Snapshot of the carousel after an inspection
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub viewport: f64,
    pub content_width: f64,
    pub offset: f64,
    pub max_offset: f64,
    pub state: CarouselState<TRACKED_CARDS>,
    pub card_count: usize,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "viewport:   {}", self.viewport)?;
        writeln!(f, "content:    {}", self.content_width)?;
        writeln!(f, "offset:     {} / {}", self.offset, self.max_offset)?;
        writeln!(f, "overflow:   {}", self.state.overflow)?;
        let visible: Vec<String> = self
            .state
            .visibility
            .visible_indices()
            .filter(|index| *index < self.card_count)
            .map(|index| (index + 1).to_string())
            .collect();
        if visible.is_empty() {
            writeln!(f, "visible:    -")?;
        } else {
            writeln!(f, "visible:    {}", visible.join(", "))?;
        }
        write!(f, "shadow:     {}", self.state.shadow)
    }
}

/// Run an inspection against `config`
pub fn inspect(config: &Config, request: &InspectRequest) -> Result<InspectReport> {
    if request.viewport == 0 {
        bail!("viewport width must be positive");
    }
    if let Some(offset) = request.offset.filter(|offset| !offset.is_finite()) {
        bail!("offset must be a finite number, got {offset}");
    }

    let bus = EventBus::new();
    let track: ContainerRef<CardTrack> = ContainerRef::new();
    let watcher = CarouselWatcher::<TRACKED_CARDS>::attach(&bus, track.clone());

    let mut card_track =
        CardTrack::from_config(config.cards.len(), &config.layout, &config.motion);
    card_track.set_viewport_width(f64::from(request.viewport));
    track.mount(card_track);
    bus.emit(HostEvent::Mounted);

    if let Some(offset) = request.offset {
        let moved = track
            .get_mut()
            .as_mut()
            .is_some_and(|t| t.jump_to(offset));
        if moved {
            bus.emit(HostEvent::Scrolled);
        }
    }

    if let Some(item) = request.item {
        track.scroll_to_item(item);
        let mut frames = 0;
        loop {
            let (moved, settling) = track
                .get_mut()
                .as_mut()
                .map(|t| (t.tick(), t.is_settling()))
                .unwrap_or((false, false));
            if moved {
                bus.emit(HostEvent::Scrolled);
            }
            frames += 1;
            if !settling || frames >= MAX_SETTLE_TICKS {
                break;
            }
        }
        debug!(item, frames, "navigation settled");
    }

    let guard = track.get();
    let Some(t) = guard.as_ref() else {
        bail!("card track was unmounted during inspection");
    };
    Ok(InspectReport {
        viewport: t.visible_width(),
        content_width: t.content_width(),
        offset: t.offset(),
        max_offset: t.max_offset(),
        state: watcher.state(),
        card_count: t.card_count(),
    })
}
