use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::palette::{Adjustments, Palette};
use super::signal::{IconShape, PositionLabel, SignalState};
use crate::profile::{ColorVisionProfile, ColorVisionType};

/// What the UI renders and the speech layer says for one signal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub color: &'static str,
    pub position_label: Option<PositionLabel>,
    pub message: &'static str,
    pub icon_shape: IconShape,
    pub use_patterns: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Types that receive the position-cue ("top light is on") message variant.
    pub position_cue_types: BTreeSet<ColorVisionType>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        // Tritan, anomalous and achromatic viewers are left out of this set as
        // shipped; widen it through configuration rather than here.
        Self {
            position_cue_types: [
                ColorVisionType::Protanopia,
                ColorVisionType::Deuteranopia,
                ColorVisionType::LowVision,
            ]
            .into_iter()
            .collect(),
        }
    }
}

/// Maps a detected signal state and the active profile onto colors, cues and
/// a spoken message. Holds configuration only; every call is pure.
#[derive(Debug, Clone, Default)]
pub struct PresentationEngine {
    config: PresentationConfig,
}

impl PresentationEngine {
    pub fn new(config: PresentationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn needs_position_cues(&self, vision_type: ColorVisionType) -> bool {
        self.config.position_cue_types.contains(&vision_type)
    }

    pub fn presentation_for(
        &self,
        state: SignalState,
        profile: &ColorVisionProfile,
    ) -> Presentation {
        let vision_type = profile.vision_type;
        let palette = Palette::for_type(vision_type);
        let adjustments = Adjustments::for_type(vision_type);

        let messages = state.messages();
        let message = if self.needs_position_cues(vision_type) {
            messages.enhanced
        } else {
            messages.standard
        };

        let position_label = if adjustments.show_position_indicator {
            state.position()
        } else {
            None
        };

        Presentation {
            color: palette.color_for(state),
            position_label,
            message,
            icon_shape: IconShape::for_state(state, adjustments.use_patterns),
            use_patterns: adjustments.use_patterns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNALS: [SignalState; 3] = [SignalState::Red, SignalState::Yellow, SignalState::Green];

    fn profile(vision_type: ColorVisionType) -> ColorVisionProfile {
        ColorVisionProfile::new(vision_type, 1.0, None)
    }

    #[test]
    fn red_green_deficient_profiles_get_enhanced_messages_and_safe_colors() {
        let engine = PresentationEngine::default();
        let normal_alert = Palette::for_type(ColorVisionType::Normal).alert;
        let normal_active = Palette::for_type(ColorVisionType::Normal).active;

        for vision_type in [ColorVisionType::Protanopia, ColorVisionType::Deuteranopia] {
            for state in SIGNALS {
                let presentation = engine.presentation_for(state, &profile(vision_type));
                assert_eq!(presentation.message, state.messages().enhanced);
                if state != SignalState::Yellow {
                    assert_ne!(presentation.color, normal_alert);
                    assert_ne!(presentation.color, normal_active);
                }
            }
        }
    }

    #[test]
    fn normal_profile_uses_standard_message_and_plain_circle() {
        let engine = PresentationEngine::default();
        let presentation =
            engine.presentation_for(SignalState::Red, &profile(ColorVisionType::Normal));
        assert_eq!(presentation.message, "Red light. Stop.");
        assert_eq!(presentation.color, "#FF0000");
        assert_eq!(presentation.position_label, None);
        assert_eq!(presentation.icon_shape, IconShape::Circle);
        assert!(!presentation.use_patterns);
    }

    #[test]
    fn position_labels_follow_vertical_layout() {
        let engine = PresentationEngine::default();
        let deutan = profile(ColorVisionType::Deuteranopia);
        assert_eq!(
            engine.presentation_for(SignalState::Red, &deutan).position_label,
            Some(PositionLabel::Top)
        );
        assert_eq!(
            engine.presentation_for(SignalState::Yellow, &deutan).position_label,
            Some(PositionLabel::Middle)
        );
        assert_eq!(
            engine.presentation_for(SignalState::Green, &deutan).position_label,
            Some(PositionLabel::Bottom)
        );
        assert_eq!(engine.presentation_for(SignalState::Flashing, &deutan).position_label, None);
    }

    #[test]
    fn unknown_state_is_silent() {
        let engine = PresentationEngine::default();
        for vision_type in ColorVisionType::ALL {
            let presentation = engine.presentation_for(SignalState::Unknown, &profile(vision_type));
            assert!(presentation.message.is_empty());
        }
    }

    #[test]
    fn presentation_is_deterministic() {
        let engine = PresentationEngine::default();
        let tritan = profile(ColorVisionType::Tritanopia);
        assert_eq!(
            engine.presentation_for(SignalState::Green, &tritan),
            engine.presentation_for(SignalState::Green, &tritan)
        );
    }

    #[test]
    fn position_cue_set_is_configurable() {
        let default_engine = PresentationEngine::default();
        assert!(!default_engine.needs_position_cues(ColorVisionType::Tritanopia));

        let mut config = PresentationConfig::default();
        config.position_cue_types.insert(ColorVisionType::Tritanopia);
        let engine = PresentationEngine::new(config);
        let presentation =
            engine.presentation_for(SignalState::Green, &profile(ColorVisionType::Tritanopia));
        assert_eq!(presentation.message, SignalState::Green.messages().enhanced);
    }

    #[test]
    fn tritan_label_shows_without_position_message() {
        let engine = PresentationEngine::default();
        for vision_type in [ColorVisionType::Tritanopia, ColorVisionType::Achromatopsia] {
            let presentation = engine.presentation_for(SignalState::Red, &profile(vision_type));
            assert_eq!(presentation.position_label, Some(PositionLabel::Top));
            assert_eq!(presentation.message, SignalState::Red.messages().standard);
        }
    }
}
