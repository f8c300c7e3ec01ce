use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Negative extents count as empty.
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Urgency rank; declaration order is sort order (most urgent first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walking,
    Cycling,
    Driving,
}

/// One object found by the detection backend in the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub id: String,
    pub label: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_problematic_color: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_warning: Option<String>,
    #[serde(default)]
    pub alert_priority: AlertPriority,
}

impl DetectedObject {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        confidence: f32,
        bbox: BoundingBox,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            confidence,
            bbox,
            colors: Vec::new(),
            is_problematic_color: false,
            color_warning: None,
            alert_priority: AlertPriority::None,
        }
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priority(mut self, priority: AlertPriority) -> Self {
        self.alert_priority = priority;
        self
    }
}

const VEHICLES: &[&str] = &["car", "truck", "bus", "motorcycle", "train"];
const SIGNALS: &[&str] = &["traffic light", "stop sign", "crosswalk signal"];
const VULNERABLE: &[&str] = &["person", "bicycle", "dog"];

/// Urgency for a COCO-style label when the backend did not assign one.
pub fn default_priority(label: &str, mode: TransportMode) -> AlertPriority {
    let label = label.trim().to_ascii_lowercase();
    let label = label.as_str();
    let is_vehicle = VEHICLES.contains(&label);
    let is_signal = SIGNALS.contains(&label);
    let is_vulnerable = VULNERABLE.contains(&label);

    match mode {
        TransportMode::Walking if is_vehicle || label == "bicycle" => AlertPriority::Critical,
        TransportMode::Cycling if is_vehicle => AlertPriority::Critical,
        TransportMode::Cycling if is_vulnerable => AlertPriority::High,
        TransportMode::Driving if is_vulnerable => AlertPriority::Critical,
        TransportMode::Driving if is_vehicle => AlertPriority::Medium,
        _ if is_signal => AlertPriority::High,
        _ if is_vulnerable => AlertPriority::Medium,
        _ => AlertPriority::Low,
    }
}
