use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use signalcore::alerts::{BoundingBox, DetectedObject};
use signalcore::detection::{DetectionFrame, SignalReading};
use signalcore::presentation::SignalState;

const LABELS: &[&str] = &[
    "car",
    "truck",
    "bus",
    "bicycle",
    "person",
    "traffic light",
    "stop sign",
    "bench",
];

const COLOR_NAMES: &[&str] = &[
    "red",
    "dark red (maroon)",
    "orange",
    "yellow",
    "green",
    "dark green (forest)",
    "blue",
    "light blue (sky)",
    "white",
    "gray",
    "black",
];

/// Cycle a pedestrian signal walks through.
const SIGNAL_CYCLE: [SignalState; 5] = [
    SignalState::Red,
    SignalState::Red,
    SignalState::Green,
    SignalState::Yellow,
    SignalState::Flashing,
];

/// Configuration for generating synthetic detection frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub frames: usize,
    pub objects_per_frame: usize,
    pub frame_interval_ms: u64,
    pub frame_width: f32,
    pub frame_height: f32,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frames: 12,
            objects_per_frame: 6,
            frame_interval_ms: 1_000,
            frame_width: 640.0,
            frame_height: 480.0,
            seed: 0,
        }
    }
}

fn build_object(
    rng: &mut StdRng,
    config: &GeneratorConfig,
    frame: usize,
    index: usize,
) -> DetectedObject {
    let label = LABELS[rng.gen_range(0..LABELS.len())];
    let width = rng.gen_range(8.0..config.frame_width / 2.0);
    let height = rng.gen_range(8.0..config.frame_height / 2.0);
    let bbox = BoundingBox::new(
        rng.gen_range(0.0..config.frame_width - width),
        rng.gen_range(0.0..config.frame_height - height),
        width,
        height,
    );

    let color_count = rng.gen_range(0..=2);
    let colors: Vec<&str> = (0..color_count)
        .map(|_| COLOR_NAMES[rng.gen_range(0..COLOR_NAMES.len())])
        .collect();

    DetectedObject::new(
        format!("f{}-o{}", frame, index),
        label,
        rng.gen_range(0.4..0.99),
        bbox,
    )
    .with_colors(colors)
}

pub fn build_frames(config: &GeneratorConfig) -> anyhow::Result<Vec<DetectionFrame>> {
    ensure!(
        config.frame_width > 32.0 && config.frame_height > 32.0,
        "synthetic frame must be larger than 32x32, got {}x{}",
        config.frame_width,
        config.frame_height
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut frames = Vec::with_capacity(config.frames);

    for frame_index in 0..config.frames {
        let state = SIGNAL_CYCLE[frame_index % SIGNAL_CYCLE.len()];
        let signal = SignalReading::new(state, rng.gen_range(0.5..1.0));
        let objects = (0..config.objects_per_frame)
            .map(|index| build_object(&mut rng, config, frame_index, index))
            .collect();

        frames.push(DetectionFrame {
            timestamp_ms: frame_index as u64 * config.frame_interval_ms,
            signal: Some(signal),
            signal_pixels: Vec::new(),
            objects,
        });
    }

    Ok(frames)
}
