//! Main TUI application
//!
//! Core application state and event loop.
//! Input handlers live in the handlers/ module.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tracing::{debug, info, warn};

use cardrail_core::constants::TRACKED_CARDS;
use cardrail_core::{
    CardTrack, CarouselState, CarouselWatcher, Config, ContainerRef, EventBus, HostEvent,
};

use crate::tui::components::{
    render_card_strip, render_dots, render_edge_shadows, render_hint_bar, strip_height,
};
use crate::tui::state::LayoutState;
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Application state
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub layout: LayoutState,
    /// The scroll container; empty until the first layout pass mounts it
    pub track: ContainerRef<CardTrack>,
    pub bus: EventBus,
    watcher: Option<CarouselWatcher<TRACKED_CARDS>>,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    /// Build the app. `theme_override` wins over the configured theme.
    pub fn new(config: Config, theme_override: Option<&str>) -> Self {
        let theme_name = theme_override.unwrap_or(&config.theme);
        if THEME_REGISTRY.get(theme_name).is_none() {
            warn!(theme = theme_name, "unknown theme, using default");
        }
        let theme = THEME_REGISTRY.get_or_default(theme_name).clone();
        info!("Using theme: {} ({})", theme.display_name, theme.name);

        let track = ContainerRef::new();
        let bus = EventBus::new();
        let watcher = CarouselWatcher::attach(&bus, track.clone());

        Self {
            config,
            theme,
            layout: LayoutState::new(),
            track,
            bus,
            watcher: Some(watcher),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Latest derived carousel state
    pub fn state(&self) -> CarouselState<TRACKED_CARDS> {
        self.watcher
            .as_ref()
            .map(|watcher| watcher.state())
            .unwrap_or_default()
    }

    /// Card nearest the viewport center
    pub fn focused_index(&self) -> Option<usize> {
        self.track
            .get()
            .as_ref()
            .and_then(|track| track.focused_index())
    }

    /// Run `f` on the mounted track
    pub(crate) fn with_track<R>(&self, f: impl FnOnce(&mut CardTrack) -> R) -> Option<R> {
        self.track.get_mut().as_mut().map(f)
    }

    /// Publish a scroll event if the offset moved
    pub(crate) fn notify_scroll(&mut self, moved: bool) {
        if moved {
            self.bus.emit(HostEvent::Scrolled);
            self.needs_redraw = true;
        }
    }

    /// Lay out `screen`, mounting the track on the first call.
    ///
    /// Always publishes an event, since a height-only resize still calls for
    /// a fresh derivation.
    pub fn apply_layout(&mut self, screen: Rect) {
        let card_height = strip_height(
            &self.config.cards,
            self.config.layout.card_width,
            &self.theme,
        );
        self.layout.compute(screen, card_height);
        let width = f64::from(self.layout.strip_width());

        if self.track.is_mounted() {
            self.with_track(|track| track.set_viewport_width(width));
            self.bus.emit(HostEvent::Resized);
        } else {
            let mut track = CardTrack::from_config(
                self.config.cards.len(),
                &self.config.layout,
                &self.config.motion,
            );
            track.set_viewport_width(width);
            info!(
                cards = track.card_count(),
                viewport = width,
                content = track.content_width(),
                "card track mounted"
            );
            self.track.mount(track);
            self.bus.emit(HostEvent::Mounted);
        }
        self.needs_redraw = true;
    }

    /// Bring card `index` into view. Fire and forget: the state catches up
    /// as the animation ticks.
    pub fn navigate_to(&mut self, index: usize) {
        debug!(index, "navigate");
        self.track.scroll_to_item(index);
        self.needs_redraw = true;
    }

    /// Advance animations by one frame.
    ///
    /// Returns true while the track is still moving or waiting to snap.
    pub fn tick(&mut self) -> bool {
        let (moved, settling) = self
            .with_track(|track| (track.tick(), track.is_settling()))
            .unwrap_or((false, false));
        self.notify_scroll(moved);
        moved || settling
    }

    /// Detach from the event bus and unmount the track
    pub fn teardown(&mut self) {
        if self.watcher.take().is_some() {
            debug!("carousel watcher detached");
        }
        self.track.unmount();
        info!("card track unmounted");
    }

    /// Draw one frame
    pub fn ui(&mut self, f: &mut Frame) {
        let state = self.state();
        let focused = self.focused_index();
        let buf = f.buffer_mut();
        buf.set_style(buf.area, Style::default().bg(self.theme.bg_color));

        if let Some(area) = self.layout.header_area {
            let title = Line::from(Span::styled(
                self.config.title.clone(),
                Style::default()
                    .fg(self.theme.text_color)
                    .add_modifier(Modifier::BOLD),
            ));
            Paragraph::new(title)
                .alignment(Alignment::Center)
                .render(area, buf);
        }

        if let Some(area) = self.layout.strip_area {
            if let Some(track) = self.track.get().as_ref() {
                render_card_strip(buf, area, &self.config.cards, track, &self.theme);
            }
            render_edge_shadows(buf, area, state.shadow, &self.theme);
        }

        self.layout.dot_areas.clear();
        if state.shows_dots() {
            if let Some(area) = self.layout.dots_row {
                let count = self.config.cards.len().min(TRACKED_CARDS);
                self.layout.dot_areas =
                    render_dots(buf, area, count, &state.visibility, &self.theme);
            }
        }

        if let Some(area) = self.layout.hint_area {
            let position = focused.map(|index| (index, self.config.cards.len()));
            render_hint_bar(buf, area, &self.theme, self.config.cards.len(), position);
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        // Restores the terminal however the loop exits
        let _restore = scopeguard::guard((), |_| crate::tui::restore_terminal());

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let size = terminal.size()?;
        self.apply_layout(Rect::new(0, 0, size.width, size.height));

        let result = self.main_loop(&mut terminal).await;

        self.teardown();
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let frame = Duration::from_millis(self.config.motion.tick_ms);

        loop {
            // Tick the track before render, not during
            if self.tick() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key.code, key.modifiers);
                        }
                        Some(Ok(Event::Mouse(mouse))) => {
                            self.handle_mouse_event(mouse);
                        }
                        Some(Ok(Event::Resize(width, height))) => {
                            self.apply_layout(Rect::new(0, 0, width, height));
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!("Terminal event error: {}", e);
                        }
                        None => {
                            info!("Terminal event stream closed");
                            self.should_quit = true;
                        }
                    }
                }
                _ = tokio::time::sleep(frame) => {
                    // Timeout - continue loop for animation ticks
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.watcher.take();
    }
}
