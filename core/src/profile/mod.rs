pub mod storage;
pub mod store;
pub mod types;

pub use storage::{JsonFileStorage, MemoryStorage, ProfileStorage};
pub use store::ProfileStore;
pub use types::{ColorVisionProfile, ColorVisionType, ProblematicColors, Severity};
