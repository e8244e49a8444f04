//! Converts presentation data into egui colors.

use crate::presentation::LevelProfile;
use crate::service::ToxicityLevel;
use eframe::egui::Color32;

/// Accent used for the verdict card of each level.
const LEVEL_ACCENTS: [(ToxicityLevel, Color32); 4] = [
    (ToxicityLevel::Safe, Color32::from_rgb(16, 185, 129)),
    (ToxicityLevel::Moderate, Color32::from_rgb(245, 158, 11)),
    (ToxicityLevel::Toxic, Color32::from_rgb(239, 68, 68)),
    (ToxicityLevel::HighlyToxic, Color32::from_rgb(153, 27, 27)),
];

/// Parse `#rrggbb`. Anything else yields `None`.
pub fn hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Bar color for a category, falling back to the accent for malformed values.
pub fn bar_color(hex: &str, fallback: Color32) -> Color32 {
    hex_color(hex).unwrap_or(fallback)
}

pub fn level_accent(profile: &LevelProfile) -> Color32 {
    LEVEL_ACCENTS
        .iter()
        .find(|(level, _)| *level == profile.level)
        .map(|(_, color)| *color)
        .unwrap_or(LEVEL_ACCENTS[3].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{DEFAULT_CATEGORY_COLOR, level_profile};

    #[test]
    fn parses_css_hex_colors() {
        assert_eq!(hex_color("#ef4444"), Some(Color32::from_rgb(0xef, 0x44, 0x44)));
        assert_eq!(
            hex_color(DEFAULT_CATEGORY_COLOR),
            Some(Color32::from_rgb(0x63, 0x66, 0xf1))
        );
        assert_eq!(hex_color("ef4444"), None);
        assert_eq!(hex_color("#ef44"), None);
        assert_eq!(hex_color("#zz4444"), None);
    }

    #[test]
    fn each_level_has_its_own_accent() {
        let accents: Vec<_> = ToxicityLevel::ALL
            .iter()
            .map(|level| level_accent(level_profile(*level)))
            .collect();
        for (index, accent) in accents.iter().enumerate() {
            assert!(!accents[index + 1..].contains(accent));
        }
    }
}
