//! Color analysis of detected regions.
//!
//! Regions arrive as HSV pixels (OpenCV scale). Shares per named shade drive
//! the dominant-color list attached to each detected object, the per-profile
//! color warning, and the fallback traffic-light reading used when the
//! detection service reports no state of its own.

pub mod analyzer;
pub mod family;
pub mod shade;

pub use analyzer::{
    analyze_region, color_warning, detect_colors, dominant_colors, read_traffic_light,
    ColorBreakdown, RegionAnalysis,
};
pub use family::ColorFamily;
pub use shade::{problematic_shades, ColorShade, Hsv, HsvRange};
