use std::sync::Arc;

use chrono::Utc;
use signalcore::alerts::{AlertOptions, AlertPipeline, AlertPriority, BoundingBox, DetectedObject};
use signalcore::color::Hsv;
use signalcore::detection::DetectionFrame;
use signalcore::presentation::{IconShape, PositionLabel, PresentationEngine, SignalState};
use signalcore::profile::{ColorVisionType, JsonFileStorage, MemoryStorage, ProfileStore};
use signalcore::telemetry::MetricsRecorder;
use signalcore::vision_test::{analyze, TestResponse};

#[test]
fn screening_result_drives_signal_presentation() {
    let store =
        ProfileStore::open(Box::new(MemoryStorage::new()), Arc::new(MetricsRecorder::new()));
    let responses = vec![
        TestResponse::new(1, "Brown and Brown"),
        TestResponse::new(2, "I can't tell"),
        TestResponse::new(5, "Brown"),
    ];
    let outcome = analyze(&responses).expect("non-empty battery");
    store.set(outcome.into_profile(Utc::now()));

    let engine = PresentationEngine::default();
    let profile = store.get();
    let presentation = engine.presentation_for(SignalState::Red, &profile);

    assert_eq!(profile.vision_type, ColorVisionType::Deuteranopia);
    assert_eq!(presentation.position_label, Some(PositionLabel::Top));
    assert_eq!(presentation.icon_shape, IconShape::Square);
    assert!(presentation.message.contains("top light"));
    assert_ne!(presentation.color, "#FF0000");
}

#[test]
fn empty_battery_leaves_profile_unknown() {
    let store =
        ProfileStore::open(Box::new(MemoryStorage::new()), Arc::new(MetricsRecorder::new()));
    if let Some(outcome) = analyze(&[]) {
        store.set(outcome.into_profile(Utc::now()));
    }
    assert_eq!(store.get().vision_type, ColorVisionType::Unknown);
}

#[test]
fn frame_from_pixels_reaches_speech_and_alerts() {
    let frame = DetectionFrame {
        timestamp_ms: 0,
        signal: None,
        signal_pixels: vec![Hsv::new(3, 230, 230); 20],
        objects: vec![
            DetectedObject::new("car", "car", 0.9, BoundingBox::new(0.0, 0.0, 30.0, 30.0))
                .with_colors(["red", "gray"]),
            DetectedObject::new("bus", "bus", 0.8, BoundingBox::new(0.0, 0.0, 60.0, 30.0))
                .with_colors(["blue"]),
        ],
    };

    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::open(
        Box::new(JsonFileStorage::new(dir.path().join("profile.json"))),
        Arc::new(MetricsRecorder::new()),
    );
    store.set(signalcore::profile::ColorVisionProfile::manual(
        ColorVisionType::Protanopia,
        Utc::now(),
    ));
    let profile = store.get();

    let reading = frame.signal_reading();
    assert_eq!(reading.state, SignalState::Red);

    let alerts = AlertPipeline::new(AlertOptions::default()).run(&frame.objects, &profile);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "car");
    assert_eq!(alerts[0].alert_priority, AlertPriority::Critical);
    assert!(!frame.objects[0].is_problematic_color);
}
