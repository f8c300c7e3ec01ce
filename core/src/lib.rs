//! Color-vision screening and adaptive signal messaging for the SignalSight app.
//!
//! The camera, speech and rendering layers live outside this crate. They hand
//! the engine a detected signal state or a list of detected objects together
//! with the active [`profile::ColorVisionProfile`] and get back colors, cues and
//! alerts that avoid the hues the user cannot reliably perceive.

pub mod alerts;
pub mod color;
pub mod detection;
pub mod math;
pub mod prelude;
pub mod presentation;
pub mod profile;
pub mod telemetry;
pub mod vision_test;

pub use prelude::{StorageError, StorageResult};
