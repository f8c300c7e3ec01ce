use std::fmt;

use serde::{Deserialize, Serialize};

/// Illuminated traffic-light aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SignalState {
    Red,
    Yellow,
    Green,
    Flashing,
    #[default]
    Unknown,
}

impl SignalState {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "red" => SignalState::Red,
            "yellow" | "amber" => SignalState::Yellow,
            "green" => SignalState::Green,
            "flashing" => SignalState::Flashing,
            _ => SignalState::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalState::Red => "red",
            SignalState::Yellow => "yellow",
            SignalState::Green => "green",
            SignalState::Flashing => "flashing",
            SignalState::Unknown => "unknown",
        }
    }

    /// Position of the lit lamp in a vertical three-lamp housing.
    pub fn position(self) -> Option<PositionLabel> {
        match self {
            SignalState::Red => Some(PositionLabel::Top),
            SignalState::Yellow => Some(PositionLabel::Middle),
            SignalState::Green => Some(PositionLabel::Bottom),
            SignalState::Flashing | SignalState::Unknown => None,
        }
    }

    pub fn messages(self) -> SignalMessages {
        match self {
            SignalState::Red => SignalMessages {
                standard: "Red light. Stop.",
                enhanced: "Stop. The top light is on. Red signal, do not cross.",
            },
            SignalState::Yellow => SignalMessages {
                standard: "Yellow light. Prepare to stop.",
                enhanced: "Caution. The middle light is on. Yellow signal, prepare to stop.",
            },
            SignalState::Green => SignalMessages {
                standard: "Green light. Safe to cross.",
                enhanced: "Go. The bottom light is on. Green signal, safe to cross.",
            },
            SignalState::Flashing => SignalMessages {
                standard: "Flashing signal. Proceed with caution.",
                enhanced: "Caution. The light is flashing. Look both ways before crossing.",
            },
            SignalState::Unknown => SignalMessages {
                standard: "",
                enhanced: "",
            },
        }
    }
}

impl From<String> for SignalState {
    fn from(value: String) -> Self {
        SignalState::parse(&value)
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalMessages {
    pub standard: &'static str,
    pub enhanced: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionLabel {
    Top,
    Middle,
    Bottom,
}

/// Color-independent redundant encoding of the signal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconShape {
    Circle,
    Square,
    Diamond,
    QuestionMark,
}

impl IconShape {
    pub fn for_state(state: SignalState, use_patterns: bool) -> Self {
        if !use_patterns {
            return IconShape::Circle;
        }
        match state {
            SignalState::Red => IconShape::Square,
            SignalState::Yellow => IconShape::Diamond,
            SignalState::Green => IconShape::Circle,
            SignalState::Flashing | SignalState::Unknown => IconShape::QuestionMark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognised_states_parse_as_unknown() {
        assert_eq!(SignalState::parse(" RED "), SignalState::Red);
        assert_eq!(SignalState::parse("blinking"), SignalState::Unknown);
        let parsed: SignalState = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(parsed, SignalState::Unknown);
        assert_eq!(serde_json::to_string(&SignalState::Green).unwrap(), "\"green\"");
    }

    #[test]
    fn unknown_state_has_nothing_to_say() {
        let messages = SignalState::Unknown.messages();
        assert!(messages.standard.is_empty());
        assert!(messages.enhanced.is_empty());
    }

    #[test]
    fn shapes_only_vary_with_patterns() {
        assert_eq!(IconShape::for_state(SignalState::Red, false), IconShape::Circle);
        assert_eq!(IconShape::for_state(SignalState::Red, true), IconShape::Square);
        assert_eq!(IconShape::for_state(SignalState::Yellow, true), IconShape::Diamond);
        assert_eq!(IconShape::for_state(SignalState::Flashing, true), IconShape::QuestionMark);
    }
}
