pub use crate::alerts::{select_alerts, AlertOptions, AlertPriority, DetectedObject};
pub use crate::detection::{DetectionFrame, SignalReading};
pub use crate::presentation::{Presentation, PresentationEngine, SignalState};
pub use crate::profile::{ColorVisionProfile, ColorVisionType, ProfileStore};
pub use crate::vision_test::{analyze, TestOutcome, TestResponse};

/// Failure raised by a profile storage collaborator.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
