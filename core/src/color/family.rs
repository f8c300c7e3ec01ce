use serde::{Deserialize, Serialize};

/// Hue families tracked by a color-vision profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Red,
    Green,
    Blue,
    Yellow,
}

const RED_WORDS: &[&str] = &["red", "maroon", "burgundy", "orange", "rust", "brown"];
const YELLOW_WORDS: &[&str] = &["yellow", "gold", "amber", "cream"];
const GREEN_WORDS: &[&str] = &["green", "lime", "olive", "forest", "khaki"];
const BLUE_WORDS: &[&str] = &["blue", "navy", "sky", "cyan", "teal", "purple", "violet"];

impl ColorFamily {
    pub const ALL: [ColorFamily; 4] = [
        ColorFamily::Red,
        ColorFamily::Green,
        ColorFamily::Blue,
        ColorFamily::Yellow,
    ];

    /// Maps a color name as reported by the detection service ("dark red (maroon)",
    /// "lime green", ...) onto a family. Neutrals and unlisted hues map to `None`.
    pub fn of_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty())
            .collect();
        let has_any = |vocabulary: &[&str]| words.iter().any(|word| vocabulary.contains(word));

        if has_any(RED_WORDS) {
            Some(ColorFamily::Red)
        } else if has_any(YELLOW_WORDS) {
            Some(ColorFamily::Yellow)
        } else if has_any(GREEN_WORDS) {
            Some(ColorFamily::Green)
        } else if has_any(BLUE_WORDS) {
            Some(ColorFamily::Blue)
        } else {
            None
        }
    }

    /// Classifies a `#RRGGBB` swatch by hue. Orange counts as red, matching
    /// `of_name`. Greys, near-black swatches and the purple band yield `None`.
    pub fn of_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .map(|value| value as f32 / 255.0)
        };
        let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if max < 0.15 || delta / max < 0.25 {
            return None;
        }

        let hue = if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * (2.0 + (b - r) / delta)
        } else {
            60.0 * (4.0 + (r - g) / delta)
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        match hue {
            h if !(40.0..330.0).contains(&h) => Some(ColorFamily::Red),
            h if (40.0..70.0).contains(&h) => Some(ColorFamily::Yellow),
            h if (70.0..170.0).contains(&h) => Some(ColorFamily::Green),
            h if (170.0..260.0).contains(&h) => Some(ColorFamily::Blue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptive_names_map_to_families() {
        assert_eq!(ColorFamily::of_name("dark red (maroon)"), Some(ColorFamily::Red));
        assert_eq!(ColorFamily::of_name("Lime Green"), Some(ColorFamily::Green));
        assert_eq!(ColorFamily::of_name("light blue (sky)"), Some(ColorFamily::Blue));
        assert_eq!(ColorFamily::of_name("gold (amber)"), Some(ColorFamily::Yellow));
        assert_eq!(ColorFamily::of_name("gray"), None);
        assert_eq!(ColorFamily::of_name("hundred"), None);
    }

    #[test]
    fn hex_swatches_classify_by_hue() {
        assert_eq!(ColorFamily::of_hex("#FF0000"), Some(ColorFamily::Red));
        assert_eq!(ColorFamily::of_hex("#00FF00"), Some(ColorFamily::Green));
        assert_eq!(ColorFamily::of_hex("#0072B2"), Some(ColorFamily::Blue));
        assert_eq!(ColorFamily::of_hex("#F0E442"), Some(ColorFamily::Yellow));
        assert_eq!(ColorFamily::of_hex("#D55E00"), Some(ColorFamily::Red));
        assert_eq!(ColorFamily::of_hex("#FF9500"), Some(ColorFamily::Red));
        assert_eq!(ColorFamily::of_hex("#CC79A7"), None);
        assert_eq!(ColorFamily::of_hex("#9E9E9E"), None);
        assert_eq!(ColorFamily::of_hex("not a color"), None);
    }
}
