pub mod frame;

pub use frame::{DetectionFrame, SignalReading};
