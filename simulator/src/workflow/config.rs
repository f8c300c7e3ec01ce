use crate::generator::frames::GeneratorConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use signalcore::alerts::{AlertOptions, TransportMode};
use signalcore::presentation::{PresentationConfig, DEFAULT_ANNOUNCE_COOLDOWN_MS};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Where the active profile is persisted; in-memory when absent.
    pub profile_path: Option<PathBuf>,
    pub alerts: AlertOptions,
    pub presentation: PresentationConfig,
    pub announce_cooldown_ms: u64,
    /// Readings below this confidence are treated as an unknown signal.
    pub min_signal_confidence: f32,
    pub synthetic: GeneratorConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            profile_path: Some(PathBuf::from("tools/data/profile.json")),
            alerts: AlertOptions::default(),
            presentation: PresentationConfig::default(),
            announce_cooldown_ms: DEFAULT_ANNOUNCE_COOLDOWN_MS,
            min_signal_confidence: 0.5,
            synthetic: GeneratorConfig::default(),
        }
    }
}

/// Command-line overrides applied on top of a loaded or default config.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub profile_path: Option<PathBuf>,
    pub max_objects: Option<usize>,
    pub show_all: bool,
    pub transport_mode: Option<TransportMode>,
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading simulator config {}", path_ref.display()))?;
        let config: SimulatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing simulator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(path) = overrides.profile_path {
            self.profile_path = Some(path);
        }
        if let Some(max_objects) = overrides.max_objects {
            self.alerts.max_display_objects = max_objects;
        }
        if overrides.show_all {
            self.alerts.show_only_problematic = false;
        }
        if let Some(mode) = overrides.transport_mode {
            self.alerts.transport_mode = mode;
        }
        if let Some(seed) = overrides.seed {
            self.synthetic.seed = seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalcore::profile::ColorVisionType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn overrides_replace_alert_options() {
        let cfg = SimulatorConfig::default().with_overrides(ConfigOverrides {
            max_objects: Some(2),
            show_all: true,
            transport_mode: Some(TransportMode::Driving),
            ..Default::default()
        });
        assert_eq!(cfg.alerts.max_display_objects, 2);
        assert!(!cfg.alerts.show_only_problematic);
        assert_eq!(cfg.alerts.transport_mode, TransportMode::Driving);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"profile_path: null\nalerts:\n  max_display_objects: 3\npresentation:\n  position_cue_types: [tritanopia, low_vision]\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = SimulatorConfig::load(&path).unwrap();
        assert!(cfg.profile_path.is_none());
        assert_eq!(cfg.alerts.max_display_objects, 3);
        assert!(cfg.alerts.show_only_problematic);
        assert!(cfg
            .presentation
            .position_cue_types
            .contains(&ColorVisionType::Tritanopia));
        assert_eq!(cfg.announce_cooldown_ms, DEFAULT_ANNOUNCE_COOLDOWN_MS);
    }
}
