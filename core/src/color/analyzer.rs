use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::shade::{problematic_shades, ColorShade, Hsv};
use crate::detection::SignalReading;
use crate::math::stats::StatsHelper;
use crate::presentation::SignalState;
use crate::profile::ColorVisionType;

/// Shades covering no more than this share of a region are ignored.
const PRESENCE_THRESHOLD_PCT: f32 = 5.0;
/// A shade must cover more than this share before it triggers a warning or a
/// traffic-light reading.
const SIGNIFICANT_PCT: f32 = 10.0;

pub type ColorBreakdown = BTreeMap<ColorShade, f32>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionAnalysis {
    pub dominant_colors: Vec<String>,
    pub is_problematic: bool,
    pub warning: Option<String>,
    pub breakdown: ColorBreakdown,
}

/// Percentage of the region covered by each shade, rounded to one decimal.
pub fn detect_colors(pixels: &[Hsv]) -> ColorBreakdown {
    let mut breakdown = ColorBreakdown::new();
    if pixels.is_empty() {
        return breakdown;
    }

    for shade in ColorShade::ALL {
        let range = shade.range();
        let matching = pixels.iter().filter(|&&pixel| range.contains(pixel)).count();
        let share = StatsHelper::percent(matching, pixels.len());
        if share > PRESENCE_THRESHOLD_PCT {
            breakdown.insert(shade, StatsHelper::round_tenth(share));
        }
    }
    breakdown
}

fn ranked(breakdown: &ColorBreakdown) -> Vec<(ColorShade, f32)> {
    let mut entries: Vec<(ColorShade, f32)> = breakdown.iter().map(|(s, p)| (*s, *p)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}

fn dominant_from(breakdown: &ColorBreakdown, top_n: usize) -> Vec<String> {
    let mut dominant: Vec<String> = Vec::new();
    for (shade, _) in ranked(breakdown) {
        if dominant.len() >= top_n {
            break;
        }
        let name = shade.display_name();
        if !dominant.iter().any(|seen| seen == name) {
            dominant.push(name.to_string());
        }
    }
    dominant
}

/// Up to `top_n` unique display names, largest share first.
pub fn dominant_colors(pixels: &[Hsv], top_n: usize) -> Vec<String> {
    dominant_from(&detect_colors(pixels), top_n)
}

/// Warning text for shades the viewer is likely to confuse, if any cover a
/// significant share of the region.
pub fn color_warning(breakdown: &ColorBreakdown, vision_type: ColorVisionType) -> Option<String> {
    let problematic = problematic_shades(vision_type);
    if problematic.is_empty() {
        return None;
    }

    let mut found: Vec<&'static str> = Vec::new();
    for (shade, share) in breakdown {
        if *share > SIGNIFICANT_PCT && problematic.contains(shade) {
            let name = shade.display_name();
            if !found.contains(&name) {
                found.push(name);
            }
        }
    }

    if found.is_empty() {
        return None;
    }
    found.truncate(2);
    Some(format!("Contains {} - may be difficult to see", found.join(", ")))
}

pub fn analyze_region(pixels: &[Hsv], vision_type: ColorVisionType) -> RegionAnalysis {
    if pixels.is_empty() {
        return RegionAnalysis::default();
    }

    let breakdown = detect_colors(pixels);
    let warning = color_warning(&breakdown, vision_type);
    RegionAnalysis {
        dominant_colors: dominant_from(&breakdown, 3),
        is_problematic: warning.is_some(),
        warning,
        breakdown,
    }
}

/// Reads the lit aspect of a cropped traffic light.
pub fn read_traffic_light(pixels: &[Hsv]) -> SignalReading {
    let breakdown = detect_colors(pixels);
    let share = |shade: ColorShade| breakdown.get(&shade).copied().unwrap_or(0.0);

    let red = share(ColorShade::RedLow) + share(ColorShade::RedHigh);
    let yellow = share(ColorShade::Yellow);
    let green = share(ColorShade::Green);

    let candidates = [
        (SignalState::Red, red, yellow.max(green)),
        (SignalState::Yellow, yellow, red.max(green)),
        (SignalState::Green, green, red.max(yellow)),
    ];
    for (state, pct, others) in candidates {
        if pct > others && pct > SIGNIFICANT_PCT {
            return SignalReading::new(state, (pct / 100.0).min(1.0));
        }
    }
    SignalReading::unknown()
}
