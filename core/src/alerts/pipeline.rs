use log::debug;

use super::annotate::annotate;
use super::object::{default_priority, AlertPriority, DetectedObject};
use super::strategy::{select_alerts, AlertOptions};
use crate::profile::ColorVisionProfile;

/// Annotates raw detections for the profile, fills in missing priorities for
/// the transport mode, then selects the alerts to display.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertPipeline {
    options: AlertOptions,
}

impl AlertPipeline {
    pub fn new(options: AlertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AlertOptions {
        &self.options
    }

    pub fn run(
        &self,
        objects: &[DetectedObject],
        profile: &ColorVisionProfile,
    ) -> Vec<DetectedObject> {
        let mut annotated = annotate(objects, profile);
        for object in annotated.iter_mut() {
            if object.alert_priority == AlertPriority::None {
                object.alert_priority =
                    default_priority(&object.label, self.options.transport_mode);
            }
        }

        let selected = select_alerts(&annotated, profile, &self.options);
        debug!(
            "alert pipeline kept {} of {} objects for {}",
            selected.len(),
            objects.len(),
            profile.vision_type
        );
        selected
    }
}
