use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::ColorFamily;

/// Closed set of vision profiles the app adapts to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ColorVisionType {
    Normal,
    Protanopia,
    Protanomaly,
    Deuteranopia,
    Deuteranomaly,
    Tritanopia,
    Tritanomaly,
    Achromatopsia,
    LowVision,
    #[default]
    Unknown,
}

impl ColorVisionType {
    pub const ALL: [ColorVisionType; 10] = [
        ColorVisionType::Normal,
        ColorVisionType::Protanopia,
        ColorVisionType::Protanomaly,
        ColorVisionType::Deuteranopia,
        ColorVisionType::Deuteranomaly,
        ColorVisionType::Tritanopia,
        ColorVisionType::Tritanomaly,
        ColorVisionType::Achromatopsia,
        ColorVisionType::LowVision,
        ColorVisionType::Unknown,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().replace(&['-', ' '][..], "_").as_str() {
            "normal" => ColorVisionType::Normal,
            "protanopia" => ColorVisionType::Protanopia,
            "protanomaly" => ColorVisionType::Protanomaly,
            "deuteranopia" => ColorVisionType::Deuteranopia,
            "deuteranomaly" => ColorVisionType::Deuteranomaly,
            "tritanopia" => ColorVisionType::Tritanopia,
            "tritanomaly" => ColorVisionType::Tritanomaly,
            "achromatopsia" => ColorVisionType::Achromatopsia,
            "low_vision" => ColorVisionType::LowVision,
            _ => ColorVisionType::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorVisionType::Normal => "normal",
            ColorVisionType::Protanopia => "protanopia",
            ColorVisionType::Protanomaly => "protanomaly",
            ColorVisionType::Deuteranopia => "deuteranopia",
            ColorVisionType::Deuteranomaly => "deuteranomaly",
            ColorVisionType::Tritanopia => "tritanopia",
            ColorVisionType::Tritanomaly => "tritanomaly",
            ColorVisionType::Achromatopsia => "achromatopsia",
            ColorVisionType::LowVision => "low_vision",
            ColorVisionType::Unknown => "unknown",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ColorVisionType::Protanomaly
            | ColorVisionType::Deuteranomaly
            | ColorVisionType::Tritanomaly => Severity::Mild,
            ColorVisionType::Protanopia
            | ColorVisionType::Deuteranopia
            | ColorVisionType::Tritanopia
            | ColorVisionType::Achromatopsia => Severity::Severe,
            ColorVisionType::Normal | ColorVisionType::LowVision | ColorVisionType::Unknown => {
                Severity::Moderate
            }
        }
    }
}

impl From<String> for ColorVisionType {
    fn from(value: String) -> Self {
        ColorVisionType::parse(&value)
    }
}

impl fmt::Display for ColorVisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

/// Hue families the viewer cannot reliably tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProblematicColors {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub yellow: bool,
}

impl ProblematicColors {
    pub const NONE: ProblematicColors = ProblematicColors {
        red: false,
        green: false,
        blue: false,
        yellow: false,
    };

    pub const ALL: ProblematicColors = ProblematicColors {
        red: true,
        green: true,
        blue: true,
        yellow: true,
    };

    pub fn for_type(vision_type: ColorVisionType) -> Self {
        let flags = |red, green, blue, yellow| ProblematicColors {
            red,
            green,
            blue,
            yellow,
        };
        match vision_type {
            ColorVisionType::Protanopia => flags(true, true, false, false),
            ColorVisionType::Protanomaly => flags(true, false, false, false),
            ColorVisionType::Deuteranopia => flags(true, true, false, true),
            ColorVisionType::Deuteranomaly => flags(false, true, false, true),
            ColorVisionType::Tritanopia | ColorVisionType::Tritanomaly => {
                flags(false, false, true, true)
            }
            ColorVisionType::Achromatopsia => Self::ALL,
            ColorVisionType::Normal | ColorVisionType::LowVision | ColorVisionType::Unknown => {
                Self::NONE
            }
        }
    }

    pub fn contains(&self, family: ColorFamily) -> bool {
        match family {
            ColorFamily::Red => self.red,
            ColorFamily::Green => self.green,
            ColorFamily::Blue => self.blue,
            ColorFamily::Yellow => self.yellow,
        }
    }

    pub fn any(&self) -> bool {
        self.red || self.green || self.blue || self.yellow
    }

    pub fn all(&self) -> bool {
        self.red && self.green && self.blue && self.yellow
    }
}

/// The active user's color-vision profile. Severity and problematic colors
/// are always derived from the type; construct through [`ColorVisionProfile::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVisionProfile {
    #[serde(rename = "type")]
    pub vision_type: ColorVisionType,
    pub severity: Severity,
    pub confidence: f32,
    pub problematic_colors: ProblematicColors,
    pub test_date: Option<DateTime<Utc>>,
}

impl ColorVisionProfile {
    pub fn new(
        vision_type: ColorVisionType,
        confidence: f32,
        test_date: Option<DateTime<Utc>>,
    ) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            vision_type,
            severity: vision_type.severity(),
            confidence,
            problematic_colors: ProblematicColors::for_type(vision_type),
            test_date,
        }
    }

    /// Profile picked by the user from a list rather than measured.
    pub fn manual(vision_type: ColorVisionType, now: DateTime<Utc>) -> Self {
        Self::new(vision_type, 1.0, Some(now))
    }

    /// Re-derives the dependent fields, e.g. after loading a hand-edited record.
    pub fn normalized(self) -> Self {
        Self::new(self.vision_type, self.confidence, self.test_date)
    }
}

impl Default for ColorVisionProfile {
    fn default() -> Self {
        Self::new(ColorVisionType::Unknown, 0.0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_type_suffix() {
        assert_eq!(ColorVisionType::Protanomaly.severity(), Severity::Mild);
        assert_eq!(ColorVisionType::Tritanopia.severity(), Severity::Severe);
        assert_eq!(ColorVisionType::Achromatopsia.severity(), Severity::Severe);
        assert_eq!(ColorVisionType::LowVision.severity(), Severity::Moderate);
    }

    #[test]
    fn achromatopsia_flags_every_family() {
        assert!(ProblematicColors::for_type(ColorVisionType::Achromatopsia).all());
        assert!(!ProblematicColors::for_type(ColorVisionType::Normal).any());
        let deutan = ProblematicColors::for_type(ColorVisionType::Deuteranopia);
        assert!(deutan.red && deutan.green && deutan.yellow && !deutan.blue);
    }

    #[test]
    fn type_strings_parse_leniently() {
        assert_eq!(ColorVisionType::parse("Low Vision"), ColorVisionType::LowVision);
        assert_eq!(ColorVisionType::parse("low-vision"), ColorVisionType::LowVision);
        assert_eq!(ColorVisionType::parse("monochromacy"), ColorVisionType::Unknown);
        let parsed: ColorVisionType = serde_json::from_str("\"tritanomaly\"").unwrap();
        assert_eq!(parsed, ColorVisionType::Tritanomaly);
        assert_eq!(
            serde_json::to_string(&ColorVisionType::LowVision).unwrap(),
            "\"low_vision\""
        );
    }

    #[test]
    fn manual_profiles_are_fully_confident() {
        let profile = ColorVisionProfile::manual(ColorVisionType::Deuteranomaly, Utc::now());
        assert_eq!(profile.confidence, 1.0);
        assert_eq!(profile.severity, Severity::Mild);
        assert!(profile.test_date.is_some());
    }

    #[test]
    fn default_profile_is_unknown_and_unflagged() {
        let profile = ColorVisionProfile::default();
        assert_eq!(profile.vision_type, ColorVisionType::Unknown);
        assert_eq!(profile.confidence, 0.0);
        assert_eq!(profile.problematic_colors, ProblematicColors::NONE);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(ColorVisionProfile::new(ColorVisionType::Normal, 1.7, None).confidence, 1.0);
        assert_eq!(
            ColorVisionProfile::new(ColorVisionType::Normal, f32::NAN, None).confidence,
            0.0
        );
    }
}
