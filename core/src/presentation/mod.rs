//! Adaptive presentation of a single traffic signal.
//!
//! Every lookup here is an exhaustive match over the closed
//! [`ColorVisionType`](crate::profile::ColorVisionType) set, so adding a type
//! fails to compile until its palette, adjustments and cue eligibility exist.

pub mod announce;
pub mod engine;
pub mod palette;
pub mod signal;

pub use announce::{should_announce, Announcement, DEFAULT_ANNOUNCE_COOLDOWN_MS};
pub use engine::{Presentation, PresentationConfig, PresentationEngine};
pub use palette::{Adjustments, Palette};
pub use signal::{IconShape, PositionLabel, SignalMessages, SignalState};
