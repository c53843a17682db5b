/// SRM thresholds and the swatch shown for anything at or below them,
/// palest to darkest. First match wins.
const SRM_SCALE: [(f64, &str); 8] = [
    (3.0, "#F3E5AB"),
    (6.0, "#EACE3F"),
    (9.0, "#E5AA28"),
    (12.0, "#D58936"),
    (15.0, "#BF6938"),
    (18.0, "#9B4A39"),
    (24.0, "#6B2A32"),
    (30.0, "#451A25"),
];

const DARKEST: &str = "#251013";

/// Maps an SRM measurement to the display swatch for the recipe card.
/// Total over all inputs; anything past the scale gets the darkest swatch.
pub fn srm_color(srm: f64) -> &'static str {
    for (limit, color) in SRM_SCALE {
        if srm <= limit {
            return color;
        }
    }
    DARKEST
}

/// Badge classes for the hop-schedule timeline, keyed on the closed usage
/// set. Anything unrecognized gets the gray badge.
pub fn usage_badge(usage: &str) -> &'static str {
    match usage {
        "Boil" => "bg-blue-100 text-blue-800",
        "Whirlpool" => "bg-purple-100 text-purple-800",
        "Dry Hop" => "bg-green-100 text-green-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(srm_color(3.0), "#F3E5AB");
        assert_eq!(srm_color(3.0001), "#EACE3F");
        assert_eq!(srm_color(30.0), "#451A25");
    }

    #[test]
    fn boundary_buckets() {
        assert_eq!(srm_color(0.0), "#F3E5AB");
        assert_eq!(srm_color(31.0), "#251013");
        assert_eq!(srm_color(-1.0), "#F3E5AB");
        assert_eq!(srm_color(1000.0), "#251013");
    }

    #[test]
    fn badge_per_usage() {
        assert_eq!(usage_badge("Boil"), "bg-blue-100 text-blue-800");
        assert_eq!(usage_badge("Whirlpool"), "bg-purple-100 text-purple-800");
        assert_eq!(usage_badge("Dry Hop"), "bg-green-100 text-green-800");
    }

    #[test]
    fn unknown_usage_falls_back_to_gray() {
        assert_eq!(usage_badge(""), "bg-gray-100 text-gray-800");
        assert_eq!(usage_badge("Mash Hop"), "bg-gray-100 text-gray-800");
        assert_eq!(usage_badge("boil"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn full_scale() {
        assert_eq!(srm_color(5.0), "#EACE3F");
        assert_eq!(srm_color(8.0), "#E5AA28");
        assert_eq!(srm_color(11.0), "#D58936");
        assert_eq!(srm_color(14.0), "#BF6938");
        assert_eq!(srm_color(17.0), "#9B4A39");
        assert_eq!(srm_color(20.0), "#6B2A32");
        assert_eq!(srm_color(27.0), "#451A25");
    }
}
