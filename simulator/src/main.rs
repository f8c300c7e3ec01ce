use anyhow::Context;
use bridge::server::Bridge;
use chrono::Utc;
use clap::Parser;
use generator::frames::build_frames;
use log::info;
use signalcore::alerts::TransportMode;
use signalcore::profile::{
    ColorVisionProfile, ColorVisionType, JsonFileStorage, MemoryStorage, ProfileStorage,
    ProfileStore,
};
use signalcore::telemetry::MetricsRecorder;
use signalcore::vision_test::analyze;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{ConfigOverrides, SimulatorConfig};
use workflow::runner::{FrameResult, Runner};
use workflow::scenario::{load_responses, Scenario};

mod bridge;
mod generator;
mod workflow;

fn parse_vision_type(value: &str) -> Result<ColorVisionType, String> {
    let parsed = ColorVisionType::parse(value);
    if parsed == ColorVisionType::Unknown && !value.trim().eq_ignore_ascii_case("unknown") {
        return Err(format!("unrecognised vision type '{}'", value));
    }
    Ok(parsed)
}

fn parse_transport_mode(value: &str) -> Result<TransportMode, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "walking" => Ok(TransportMode::Walking),
        "cycling" => Ok(TransportMode::Cycling),
        "driving" => Ok(TransportMode::Driving),
        other => Err(format!("unrecognised transport mode '{}'", other)),
    }
}

#[derive(Parser)]
#[command(author, version, about = "Offline driver and HTTP bridge for the signalcore engine")]
struct Args {
    /// Load a simulator config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override where the active profile is persisted
    #[arg(long)]
    profile_path: Option<PathBuf>,
    /// Reset the stored profile to unknown before anything else runs
    #[arg(long, default_value_t = false)]
    reset: bool,
    /// Select a vision type manually (e.g. deuteranopia, low_vision)
    #[arg(long, value_parser = parse_vision_type)]
    vision_type: Option<ColorVisionType>,
    /// Score a YAML answer sheet and store the resulting profile
    #[arg(long)]
    answers: Option<PathBuf>,
    /// Replay a YAML scenario of detection frames
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Replay a seeded synthetic scenario and append a summary report
    #[arg(long, default_value_t = false)]
    offline: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    max_objects: Option<usize>,
    /// Show every object instead of only those with problematic colors
    #[arg(long, default_value_t = false)]
    show_all: bool,
    #[arg(long, value_parser = parse_transport_mode)]
    transport: Option<TransportMode>,
    /// Keep the HTTP bridge alive for the mobile UI
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn print_results(results: &[FrameResult]) {
    for result in results {
        let cue = result
            .presentation
            .position_label
            .map(|label| format!(" [{:?}]", label))
            .unwrap_or_default();
        println!(
            "t={}ms {} -> {} {:?}{}{}",
            result.timestamp_ms,
            result.state,
            result.presentation.color,
            result.presentation.icon_shape,
            cue,
            if result.announce {
                format!(" say: \"{}\"", result.presentation.message)
            } else {
                String::new()
            }
        );
        for alert in &result.alerts {
            println!(
                "    {:?} {} ({:.0}px²){}",
                alert.alert_priority,
                alert.label,
                alert.bbox.area(),
                alert
                    .color_warning
                    .as_ref()
                    .map(|warning| format!(" - {}", warning))
                    .unwrap_or_default()
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base_config = if let Some(path) = &args.config {
        SimulatorConfig::load(path)?
    } else {
        SimulatorConfig::default()
    };
    let config = base_config.with_overrides(ConfigOverrides {
        profile_path: args.profile_path.clone(),
        max_objects: args.max_objects,
        show_all: args.show_all,
        transport_mode: args.transport,
        seed: args.seed,
    });

    let metrics = Arc::new(MetricsRecorder::new());
    let storage: Box<dyn ProfileStorage> = match &config.profile_path {
        Some(path) => Box::new(JsonFileStorage::new(path)),
        None => Box::new(MemoryStorage::new()),
    };
    let store = Arc::new(ProfileStore::open(storage, metrics.clone()));

    if args.reset {
        store.reset();
        println!("Profile reset to unknown.");
    }
    if let Some(vision_type) = args.vision_type {
        store.set(ColorVisionProfile::manual(vision_type, Utc::now()));
        println!("Profile set to {}.", vision_type);
    }
    if let Some(path) = &args.answers {
        let responses = load_responses(path)?;
        match analyze(&responses) {
            Some(outcome) => {
                println!(
                    "Vision test -> {} ({:?} confidence): {}",
                    outcome.vision_type, outcome.confidence, outcome.description
                );
                store.set(outcome.into_profile(Utc::now()));
            }
            None => println!("Vision test had no answers; profile unchanged."),
        }
    }

    let profile = store.get();
    info!(
        "active profile {} severity {:?} confidence {:.2}",
        profile.vision_type, profile.severity, profile.confidence
    );

    let runner = Runner::new(config.clone(), store.clone(), metrics.clone());

    if let Some(path) = &args.scenario {
        let scenario = Scenario::load(path)?;
        println!(
            "Replaying scenario {} ({} frames)",
            scenario.name.as_deref().unwrap_or("unnamed"),
            scenario.frames.len()
        );
        print_results(&runner.replay(&scenario.frames));
    }

    let mut last_result = None;
    if args.offline {
        let frames = build_frames(&config.synthetic)?;
        let results = runner.replay(&frames);
        print_results(&results);

        let alert_total: usize = results.iter().map(|result| result.alerts.len()).sum();
        let spoken = results.iter().filter(|result| result.announce).count();
        println!(
            "Offline run -> frames {}, alerts {}, announcements {}",
            results.len(),
            alert_total,
            spoken
        );

        let report = format!(
            "profile={} frames={} alerts={} announcements={} seed={}\n",
            store.get().vision_type,
            results.len(),
            alert_total,
            spoken,
            config.synthetic.seed
        );
        let report_path = PathBuf::from("tools/data/offline_alerts.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&report_path)
            .with_context(|| format!("opening report {}", report_path.display()))?;
        file.write_all(report.as_bytes())?;
        last_result = results.last().cloned();
    }

    if args.serve {
        let bridge = Bridge::new(Arc::new(runner.clone()));
        if let Some(result) = &last_result {
            bridge.publish(result);
        }
        bridge.publish_status("HTTP bridge running on 127.0.0.1:9000 (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    let snapshot = metrics.snapshot();
    info!(
        "frames {} alerts {} announcements {} persistence errors {}",
        snapshot.frames, snapshot.alerts, snapshot.announcements, snapshot.persistence_errors
    );

    Ok(())
}
