use serde::{Deserialize, Serialize};

use crate::alerts::DetectedObject;
use crate::color::{read_traffic_light, Hsv};
use crate::presentation::SignalState;

/// Traffic-light state as reported by the detection backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReading {
    pub state: SignalState,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SignalReading {
    pub fn new(state: SignalState, confidence: f32) -> Self {
        Self {
            state,
            confidence: confidence.clamp(0.0, 1.0),
            message: None,
        }
    }

    pub fn unknown() -> Self {
        Self::new(SignalState::Unknown, 0.0)
    }

    /// The reported state, or `Unknown` when the backend was not confident enough.
    pub fn state_at(&self, min_confidence: f32) -> SignalState {
        if self.confidence < min_confidence {
            SignalState::Unknown
        } else {
            self.state
        }
    }
}

/// One detection cycle: an optional signal reading, the objects found in the
/// frame and, when the backend only sent a crop, the raw HSV pixels of the
/// traffic light.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionFrame {
    #[serde(default)]
    pub timestamp_ms: u64,
    #[serde(default)]
    pub signal: Option<SignalReading>,
    #[serde(default)]
    pub signal_pixels: Vec<Hsv>,
    #[serde(default)]
    pub objects: Vec<DetectedObject>,
}

impl DetectionFrame {
    /// Backend reading when present, otherwise a reading derived from the crop.
    pub fn signal_reading(&self) -> SignalReading {
        match &self.signal {
            Some(reading) => reading.clone(),
            None if !self.signal_pixels.is_empty() => read_traffic_light(&self.signal_pixels),
            None => SignalReading::unknown(),
        }
    }
}
