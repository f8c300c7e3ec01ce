use std::sync::{Arc, Mutex, RwLock};

use super::storage::ProfileStorage;
use super::types::ColorVisionProfile;
use crate::telemetry::{LogManager, MetricsRecorder};

/// Holds the single active profile.
///
/// The profile is an immutable value behind an `Arc`; `set` swaps the pointer
/// so concurrent readers observe either the previous or the new profile in
/// full. Writers are serialized across swap and save, so the last profile set
/// is also the last one persisted. Save failures never roll the in-memory
/// value back.
pub struct ProfileStore {
    current: RwLock<Arc<ColorVisionProfile>>,
    write_lock: Mutex<()>,
    storage: Box<dyn ProfileStorage>,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl ProfileStore {
    /// Loads the persisted profile, falling back to the default one.
    pub fn open(storage: Box<dyn ProfileStorage>, metrics: Arc<MetricsRecorder>) -> Self {
        let logger = LogManager::new("profile");
        let initial = match storage.load() {
            Ok(Some(profile)) => {
                logger.record(&format!("loaded {} profile", profile.vision_type));
                profile
            }
            Ok(None) => ColorVisionProfile::default(),
            Err(err) => {
                logger.warn(&format!("could not load profile, using default: {}", err));
                metrics.record_persistence_error();
                ColorVisionProfile::default()
            }
        };

        Self {
            current: RwLock::new(Arc::new(initial)),
            write_lock: Mutex::new(()),
            storage,
            metrics,
            logger,
        }
    }

    pub fn get(&self) -> Arc<ColorVisionProfile> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Replaces the active profile. No fields are merged from the previous one.
    pub fn set(&self, profile: ColorVisionProfile) {
        let profile = Arc::new(profile.normalized());
        let _writer = match self.write_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        {
            let mut guard = match self.current.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = Arc::clone(&profile);
        }
        self.logger.record(&format!(
            "active profile {} (confidence {:.2})",
            profile.vision_type, profile.confidence
        ));
        self.persist(&profile);
    }

    pub fn reset(&self) {
        self.set(ColorVisionProfile::default());
    }

    fn persist(&self, profile: &ColorVisionProfile) {
        if let Err(err) = self.storage.save(profile) {
            self.metrics.record_persistence_error();
            self.logger.warn(&format!("profile save failed: {}", err));
        }
    }
}
