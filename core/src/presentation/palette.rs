use serde::Serialize;

use super::signal::SignalState;
use crate::profile::ColorVisionType;

/// Colors feeding the signal overlay. `alert` never falls in a hue family the
/// profile flags as problematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bracket: &'static str,
    pub alert: &'static str,
    pub active: &'static str,
    pub warning: &'static str,
}

impl Palette {
    pub fn for_type(vision_type: ColorVisionType) -> Self {
        use ColorVisionType::*;
        match vision_type {
            Normal => Palette {
                bracket: "#FFFFFF",
                alert: "#FF0000",
                active: "#00FF00",
                warning: "#FFFF00",
            },
            Protanopia => Palette {
                bracket: "#FFFFFF",
                alert: "#0072B2",
                active: "#56B4E9",
                warning: "#F0E442",
            },
            Protanomaly => Palette {
                bracket: "#FFFFFF",
                alert: "#0072B2",
                active: "#009E73",
                warning: "#F0E442",
            },
            Deuteranopia => Palette {
                bracket: "#FFFFFF",
                alert: "#0072B2",
                active: "#56B4E9",
                warning: "#CC79A7",
            },
            Deuteranomaly => Palette {
                bracket: "#FFFFFF",
                alert: "#D55E00",
                active: "#0072B2",
                warning: "#CC79A7",
            },
            Tritanopia => Palette {
                bracket: "#FFFFFF",
                alert: "#E03C31",
                active: "#009E73",
                warning: "#CC79A7",
            },
            Tritanomaly => Palette {
                bracket: "#FFFFFF",
                alert: "#D55E00",
                active: "#009E73",
                warning: "#CC79A7",
            },
            Achromatopsia => Palette {
                bracket: "#FFFFFF",
                alert: "#FFFFFF",
                active: "#9E9E9E",
                warning: "#616161",
            },
            LowVision => Palette {
                bracket: "#FFFFFF",
                alert: "#FFFF00",
                active: "#00FFFF",
                warning: "#FF00FF",
            },
            Unknown => Palette {
                bracket: "#FFFFFF",
                alert: "#FF9500",
                active: "#0A84FF",
                warning: "#FFCC00",
            },
        }
    }

    pub fn color_for(&self, state: SignalState) -> &'static str {
        match state {
            SignalState::Red => self.alert,
            SignalState::Yellow | SignalState::Flashing => self.warning,
            SignalState::Green => self.active,
            SignalState::Unknown => self.bracket,
        }
    }
}

/// Per-type rendering adjustments.
///
/// `show_position_indicator` only controls the visual TOP/MIDDLE/BOTTOM label.
/// The spoken message switches to its position-cue wording separately, through
/// `PresentationConfig::position_cue_types`. Tritanopia and achromatopsia show
/// the label but keep the standard message unless added to that set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Adjustments {
    pub show_position_indicator: bool,
    pub use_patterns: bool,
    pub high_contrast: bool,
}

impl Adjustments {
    pub fn for_type(vision_type: ColorVisionType) -> Self {
        use ColorVisionType::*;
        let (show_position_indicator, use_patterns, high_contrast) = match vision_type {
            Normal | Unknown => (false, false, false),
            Protanopia | Deuteranopia | Tritanopia => (true, true, false),
            Protanomaly | Deuteranomaly | Tritanomaly => (false, true, false),
            Achromatopsia | LowVision => (true, true, true),
        };
        Self {
            show_position_indicator,
            use_patterns,
            high_contrast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorFamily;
    use crate::profile::ProblematicColors;

    #[test]
    fn no_palette_role_uses_a_problematic_hue() {
        for vision_type in ColorVisionType::ALL {
            let palette = Palette::for_type(vision_type);
            let flagged = ProblematicColors::for_type(vision_type);
            for swatch in [palette.alert, palette.active, palette.warning] {
                if let Some(family) = ColorFamily::of_hex(swatch) {
                    assert!(
                        !flagged.contains(family),
                        "{:?} palette uses {} ({:?})",
                        vision_type,
                        swatch,
                        family
                    );
                }
            }
        }
    }

    #[test]
    fn orange_swatches_count_against_protan_palettes() {
        let flagged = ProblematicColors::for_type(ColorVisionType::Protanopia);
        let orange = ColorFamily::of_hex("#D55E00");
        assert_eq!(orange, Some(ColorFamily::Red));
        assert!(orange.map(|family| flagged.contains(family)).unwrap_or(false));
    }

    #[test]
    fn unknown_state_renders_with_bracket_color() {
        let palette = Palette::for_type(ColorVisionType::Protanopia);
        assert_eq!(palette.color_for(SignalState::Unknown), palette.bracket);
        assert_eq!(palette.color_for(SignalState::Red), "#0072B2");
    }

    #[test]
    fn mild_types_get_patterns_without_position_indicator() {
        let adjustments = Adjustments::for_type(ColorVisionType::Deuteranomaly);
        assert!(adjustments.use_patterns);
        assert!(!adjustments.show_position_indicator);
        assert_eq!(Adjustments::for_type(ColorVisionType::Normal), Adjustments::default());
    }
}
