use crate::workflow::config::SimulatorConfig;
use log::debug;
use serde::Serialize;
use signalcore::alerts::{AlertPipeline, DetectedObject};
use signalcore::detection::{DetectionFrame, SignalReading};
use signalcore::presentation::{
    should_announce, Announcement, Presentation, PresentationEngine, SignalState,
};
use signalcore::profile::{ColorVisionType, ProfileStore};
use signalcore::telemetry::MetricsRecorder;
use std::sync::Arc;

/// Everything the UI and speech layers need for one detection cycle.
#[derive(Debug, Clone, Serialize)]
pub struct FrameResult {
    pub timestamp_ms: u64,
    pub vision_type: ColorVisionType,
    pub reading: SignalReading,
    pub state: SignalState,
    pub presentation: Presentation,
    pub announce: bool,
    pub alerts: Vec<DetectedObject>,
}

impl FrameResult {
    /// Debounce state to carry into the next frame, if this one was spoken.
    pub fn announcement(&self) -> Option<Announcement> {
        self.announce.then_some(Announcement {
            state: self.state,
            at_ms: self.timestamp_ms,
        })
    }
}

#[derive(Clone)]
pub struct Runner {
    config: SimulatorConfig,
    engine: PresentationEngine,
    pipeline: AlertPipeline,
    store: Arc<ProfileStore>,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(
        config: SimulatorConfig,
        store: Arc<ProfileStore>,
        metrics: Arc<MetricsRecorder>,
    ) -> Self {
        let engine = PresentationEngine::new(config.presentation.clone());
        let pipeline = AlertPipeline::new(config.alerts);
        Self {
            config,
            engine,
            pipeline,
            store,
            metrics,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Maps one frame through the engine against the profile active right now.
    pub fn execute(&self, frame: &DetectionFrame, previous: Option<&Announcement>) -> FrameResult {
        let profile = self.store.get();
        let reading = frame.signal_reading();
        let state = reading.state_at(self.config.min_signal_confidence);

        let presentation = self.engine.presentation_for(state, &profile);
        let announce = !presentation.message.is_empty()
            && should_announce(
                state,
                previous,
                frame.timestamp_ms,
                self.config.announce_cooldown_ms,
            );
        let alerts = self.pipeline.run(&frame.objects, &profile);

        self.metrics.record_frame(alerts.len(), announce);
        debug!(
            "frame {} -> {} (announce {}), {} alerts",
            frame.timestamp_ms,
            state,
            announce,
            alerts.len()
        );

        FrameResult {
            timestamp_ms: frame.timestamp_ms,
            vision_type: profile.vision_type,
            reading,
            state,
            presentation,
            announce,
            alerts,
        }
    }

    /// Replays frames in order, carrying the debounce state between them.
    pub fn replay(&self, frames: &[DetectionFrame]) -> Vec<FrameResult> {
        let mut previous: Option<Announcement> = None;
        frames
            .iter()
            .map(|frame| {
                let result = self.execute(frame, previous.as_ref());
                if let Some(announcement) = result.announcement() {
                    previous = Some(announcement);
                }
                result
            })
            .collect()
    }
}
