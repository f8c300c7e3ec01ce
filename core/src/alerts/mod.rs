//! Selection of detected objects to surface as alerts.
//!
//! The profile type picks the selection axis: low-vision users get alerts
//! ranked by urgency and size, every other profile gets alerts filtered by
//! whether the object's colors are ones the user may misread.

pub mod annotate;
pub mod object;
pub mod pipeline;
pub mod strategy;

pub use annotate::{annotate, annotate_object, is_problematic};
pub use object::{default_priority, AlertPriority, BoundingBox, DetectedObject, TransportMode};
pub use pipeline::AlertPipeline;
pub use strategy::{
    select_alerts, strategy_for, AlertOptions, AlertStrategy, PassThrough, ProblematicOnly,
    UrgencyFirst, DEFAULT_MAX_DISPLAY_OBJECTS,
};
