use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::types::ColorVisionProfile;
use crate::prelude::{StorageError, StorageResult};

/// Key-value persistence collaborator for the single active profile.
pub trait ProfileStorage: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<ColorVisionProfile>>;
    fn save(&self, profile: &ColorVisionProfile) -> StorageResult<()>;
}

/// Stores the profile as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<ColorVisionProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let profile: ColorVisionProfile = serde_json::from_str(&contents)?;
        Ok(Some(profile.normalized()))
    }

    fn save(&self, profile: &ColorVisionProfile) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-process storage, used when no profile path is configured.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<ColorVisionProfile>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<ColorVisionProfile>> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|_| StorageError::Unavailable("memory slot poisoned".into()))
    }

    fn save(&self, profile: &ColorVisionProfile) -> StorageResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("memory slot poisoned".into()))?;
        *slot = Some(profile.clone());
        Ok(())
    }
}
