use serde::{Deserialize, Serialize};

use super::family::ColorFamily;
use crate::profile::ColorVisionType;

/// A pixel in OpenCV HSV space: hue 0-180, saturation and value 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Inclusive HSV bounds, matching `cv2.inRange` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    const fn new(lower: (u8, u8, u8), upper: (u8, u8, u8)) -> Self {
        Self {
            lower: Hsv::new(lower.0, lower.1, lower.2),
            upper: Hsv::new(upper.0, upper.1, upper.2),
        }
    }

    pub fn contains(&self, pixel: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&pixel.h)
            && (self.lower.s..=self.upper.s).contains(&pixel.s)
            && (self.lower.v..=self.upper.v).contains(&pixel.v)
    }
}

/// Named shades the region analyzer looks for. Declaration order is the
/// tie-break order when two shades cover the same share of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorShade {
    RedLow,
    RedHigh,
    DarkRed,
    DarkRedHigh,
    Orange,
    RustOrange,
    Brown,
    DarkBrown,
    Tan,
    Yellow,
    Gold,
    PaleYellow,
    Green,
    Lime,
    DarkGreen,
    Olive,
    Teal,
    Cyan,
    Blue,
    LightBlue,
    DarkBlue,
    Purple,
    Violet,
    Lavender,
    Magenta,
    Plum,
    Pink,
    HotPink,
    White,
    Gray,
    Black,
}

use ColorShade::*;

impl ColorShade {
    pub const ALL: [ColorShade; 31] = [
        RedLow, RedHigh, DarkRed, DarkRedHigh, Orange, RustOrange, Brown, DarkBrown, Tan, Yellow,
        Gold, PaleYellow, Green, Lime, DarkGreen, Olive, Teal, Cyan, Blue, LightBlue, DarkBlue,
        Purple, Violet, Lavender, Magenta, Plum, Pink, HotPink, White, Gray, Black,
    ];

    pub fn range(self) -> HsvRange {
        match self {
            RedLow => HsvRange::new((0, 100, 100), (10, 255, 255)),
            RedHigh => HsvRange::new((160, 100, 100), (180, 255, 255)),
            DarkRed => HsvRange::new((0, 100, 50), (10, 255, 100)),
            DarkRedHigh => HsvRange::new((160, 100, 50), (180, 255, 100)),
            Orange => HsvRange::new((10, 100, 100), (20, 255, 255)),
            RustOrange => HsvRange::new((10, 80, 80), (20, 255, 150)),
            Brown => HsvRange::new((10, 50, 50), (25, 200, 150)),
            DarkBrown => HsvRange::new((10, 50, 30), (25, 200, 80)),
            Tan => HsvRange::new((15, 30, 150), (30, 100, 220)),
            Yellow => HsvRange::new((25, 100, 100), (35, 255, 255)),
            Gold => HsvRange::new((20, 80, 100), (30, 255, 200)),
            PaleYellow => HsvRange::new((25, 40, 180), (35, 100, 255)),
            Green => HsvRange::new((35, 100, 100), (85, 255, 255)),
            Lime => HsvRange::new((35, 100, 150), (55, 255, 255)),
            DarkGreen => HsvRange::new((35, 100, 30), (85, 255, 100)),
            Olive => HsvRange::new((30, 30, 50), (50, 150, 150)),
            Teal => HsvRange::new((80, 80, 80), (95, 255, 200)),
            Cyan => HsvRange::new((85, 100, 100), (100, 255, 255)),
            Blue => HsvRange::new((100, 100, 100), (130, 255, 255)),
            LightBlue => HsvRange::new((100, 50, 150), (115, 150, 255)),
            DarkBlue => HsvRange::new((100, 100, 50), (130, 255, 120)),
            Purple => HsvRange::new((130, 100, 100), (145, 255, 255)),
            Violet => HsvRange::new((145, 80, 80), (160, 255, 255)),
            Lavender => HsvRange::new((130, 30, 150), (155, 100, 255)),
            Magenta => HsvRange::new((150, 100, 100), (165, 255, 255)),
            Plum => HsvRange::new((140, 50, 50), (160, 150, 150)),
            Pink => HsvRange::new((160, 50, 150), (175, 200, 255)),
            HotPink => HsvRange::new((165, 100, 150), (175, 255, 255)),
            White => HsvRange::new((0, 0, 200), (180, 30, 255)),
            Gray => HsvRange::new((0, 0, 80), (180, 30, 200)),
            Black => HsvRange::new((0, 0, 0), (180, 255, 50)),
        }
    }

    /// Name spoken to the user and reported in `DetectedObject::colors`.
    pub fn display_name(self) -> &'static str {
        match self {
            RedLow | RedHigh => "red",
            DarkRed => "dark red (maroon)",
            DarkRedHigh => "dark red (burgundy)",
            Orange => "orange",
            RustOrange => "rust orange",
            Brown => "brown",
            DarkBrown => "dark brown (chocolate)",
            Tan => "tan (beige)",
            Yellow => "yellow",
            Gold => "gold (amber)",
            PaleYellow => "pale yellow (cream)",
            Green => "green",
            Lime => "lime green",
            DarkGreen => "dark green (forest)",
            Olive => "olive (khaki)",
            Teal => "teal",
            Cyan => "cyan",
            Blue => "blue",
            LightBlue => "light blue (sky)",
            DarkBlue => "dark blue (navy)",
            Purple => "purple",
            Violet => "violet",
            Lavender => "lavender",
            Magenta => "magenta (fuchsia)",
            Plum => "plum",
            Pink => "pink",
            HotPink => "hot pink",
            White => "white",
            Gray => "gray",
            Black => "black",
        }
    }

    pub fn family(self) -> Option<ColorFamily> {
        ColorFamily::of_name(self.display_name())
    }
}

const PROTANOPIA: &[ColorShade] = &[
    RedLow, RedHigh, DarkRed, DarkRedHigh, Orange, RustOrange, Brown, DarkBrown, Green, DarkGreen,
    Olive, Lime,
];
const PROTANOMALY: &[ColorShade] = &[
    RedLow, RedHigh, DarkRed, DarkRedHigh, Orange, RustOrange, Brown,
];
const DEUTERANOPIA: &[ColorShade] = &[
    RedLow, RedHigh, DarkRed, DarkRedHigh, Green, DarkGreen, Lime, Olive, Yellow, Gold, Brown,
];
const DEUTERANOMALY: &[ColorShade] = &[Green, DarkGreen, Lime, Olive, Yellow, Gold];
const TRITANOPIA: &[ColorShade] = &[
    Blue, LightBlue, DarkBlue, Yellow, Gold, PaleYellow, Cyan, Teal, Violet, Purple,
];
const TRITANOMALY: &[ColorShade] = &[Blue, LightBlue, Yellow, Gold];

/// Shades a viewer with the given deficiency is likely to confuse.
pub fn problematic_shades(vision_type: ColorVisionType) -> &'static [ColorShade] {
    match vision_type {
        ColorVisionType::Protanopia => PROTANOPIA,
        ColorVisionType::Protanomaly => PROTANOMALY,
        ColorVisionType::Deuteranopia => DEUTERANOPIA,
        ColorVisionType::Deuteranomaly => DEUTERANOMALY,
        ColorVisionType::Tritanopia => TRITANOPIA,
        ColorVisionType::Tritanomaly => TRITANOMALY,
        ColorVisionType::Achromatopsia => &ColorShade::ALL,
        ColorVisionType::Normal | ColorVisionType::LowVision | ColorVisionType::Unknown => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let red = RedLow.range();
        assert!(red.contains(Hsv::new(0, 100, 100)));
        assert!(red.contains(Hsv::new(10, 255, 255)));
        assert!(!red.contains(Hsv::new(11, 200, 200)));
    }

    #[test]
    fn shade_families_follow_display_names() {
        assert_eq!(DarkRedHigh.family(), Some(ColorFamily::Red));
        assert_eq!(PaleYellow.family(), Some(ColorFamily::Yellow));
        assert_eq!(Teal.family(), Some(ColorFamily::Blue));
        assert_eq!(Gray.family(), None);
    }

    #[test]
    fn achromatopsia_confuses_every_shade() {
        assert_eq!(problematic_shades(ColorVisionType::Achromatopsia).len(), 31);
        assert!(problematic_shades(ColorVisionType::Normal).is_empty());
        assert!(problematic_shades(ColorVisionType::Tritanomaly).contains(&Gold));
    }
}
