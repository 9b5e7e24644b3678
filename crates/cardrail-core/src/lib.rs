//! Cardrail Core - scroll-state derivation for a horizontal card carousel
//!
//! This crate provides everything below the terminal layer:
//! - Scroll metrics snapshots and the probe that takes them
//! - Per-card visibility (midpoint rule) and overflow detection
//! - Edge shadow classification
//! - Navigation ("bring card N into view")
//! - The card track host model with smooth scrolling and snapping
//! - Event bus with scoped subscriptions and the state watcher
//! - Card content and configuration

pub mod animation;
pub mod config;
pub mod constants;
pub mod content;
pub mod derived;
pub mod events;
pub mod metrics;
pub mod navigation;
pub mod shadow;
pub mod track;
pub mod visibility;

// Re-exports for convenience
pub use config::{Config, ConfigError};
pub use content::Card;
pub use derived::{CarouselState, CarouselWatcher};
pub use events::{EventBus, HostEvent, Subscription};
pub use metrics::{measure, ContainerRef, ItemGeometry, ScrollContainer, ScrollMetrics};
pub use navigation::{scroll_to_item, ScrollTarget};
pub use shadow::{classify, visible_shadow, EdgeShadow};
pub use track::CardTrack;
pub use visibility::{resolve_overflow, resolve_visibility, VisibilityVector};
