use serde::{Deserialize, Serialize};

use super::object::{DetectedObject, TransportMode};
use crate::profile::{ColorVisionProfile, ColorVisionType};

pub const DEFAULT_MAX_DISPLAY_OBJECTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertOptions {
    pub show_only_problematic: bool,
    /// Upper bound on simultaneous alerts, to keep the overlay readable.
    pub max_display_objects: usize,
    pub transport_mode: TransportMode,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            show_only_problematic: true,
            max_display_objects: DEFAULT_MAX_DISPLAY_OBJECTS,
            transport_mode: TransportMode::Walking,
        }
    }
}

/// Decides which objects surface as alerts and in what order, before the
/// display bound is applied.
pub trait AlertStrategy: Sync {
    fn name(&self) -> &'static str;
    fn order(&self, objects: &[DetectedObject]) -> Vec<DetectedObject>;
}

/// Low-vision mode: urgency then proximity (box area) replace color entirely.
pub struct UrgencyFirst;

impl AlertStrategy for UrgencyFirst {
    fn name(&self) -> &'static str {
        "urgency-first"
    }

    fn order(&self, objects: &[DetectedObject]) -> Vec<DetectedObject> {
        let mut ordered = objects.to_vec();
        ordered.sort_by(|a, b| {
            a.alert_priority
                .cmp(&b.alert_priority)
                .then_with(|| b.bbox.area().total_cmp(&a.bbox.area()))
        });
        ordered
    }
}

/// Keeps only objects whose colors the viewer may misread, in input order.
pub struct ProblematicOnly;

impl AlertStrategy for ProblematicOnly {
    fn name(&self) -> &'static str {
        "problematic-only"
    }

    fn order(&self, objects: &[DetectedObject]) -> Vec<DetectedObject> {
        objects
            .iter()
            .filter(|object| object.is_problematic_color)
            .cloned()
            .collect()
    }
}

pub struct PassThrough;

impl AlertStrategy for PassThrough {
    fn name(&self) -> &'static str {
        "pass-through"
    }

    fn order(&self, objects: &[DetectedObject]) -> Vec<DetectedObject> {
        objects.to_vec()
    }
}

pub fn strategy_for(
    vision_type: ColorVisionType,
    options: &AlertOptions,
) -> &'static dyn AlertStrategy {
    match vision_type {
        ColorVisionType::LowVision => &UrgencyFirst,
        _ if options.show_only_problematic => &ProblematicOnly,
        _ => &PassThrough,
    }
}

/// Orders and bounds the alerts for one frame. Objects must already carry
/// `is_problematic_color` for this profile (see [`super::annotate`]).
/// Inputs are not modified and the result is a pure function of the inputs.
pub fn select_alerts(
    objects: &[DetectedObject],
    profile: &ColorVisionProfile,
    options: &AlertOptions,
) -> Vec<DetectedObject> {
    let strategy = strategy_for(profile.vision_type, options);
    let mut selected = strategy.order(objects);
    selected.truncate(options.max_display_objects);
    selected
}
