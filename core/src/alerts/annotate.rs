use crate::color::ColorFamily;
use crate::profile::ColorVisionProfile;

use super::object::DetectedObject;

fn flagged_colors<'a>(colors: &'a [String], profile: &ColorVisionProfile) -> Vec<&'a str> {
    let flags = profile.problematic_colors;
    let mut flagged: Vec<&str> = Vec::new();
    for name in colors {
        let hit = flags.all()
            || ColorFamily::of_name(name)
                .map(|family| flags.contains(family))
                .unwrap_or(false);
        if hit && !flagged.contains(&name.as_str()) {
            flagged.push(name.as_str());
        }
    }
    flagged
}

/// True iff any of the colors falls in a family the profile flags. With every
/// family flagged (achromatopsia) any named color counts; no colors never does.
pub fn is_problematic(colors: &[String], profile: &ColorVisionProfile) -> bool {
    !flagged_colors(colors, profile).is_empty()
}

/// Copy of `object` with `is_problematic_color` and `color_warning` computed
/// for the profile.
pub fn annotate_object(object: &DetectedObject, profile: &ColorVisionProfile) -> DetectedObject {
    let mut flagged = flagged_colors(&object.colors, profile);
    flagged.truncate(2);

    let mut annotated = object.clone();
    annotated.is_problematic_color = !flagged.is_empty();
    annotated.color_warning = if flagged.is_empty() {
        None
    } else {
        Some(format!("Contains {} - may be difficult to see", flagged.join(", ")))
    };
    annotated
}

pub fn annotate(objects: &[DetectedObject], profile: &ColorVisionProfile) -> Vec<DetectedObject> {
    objects
        .iter()
        .map(|object| annotate_object(object, profile))
        .collect()
}
