//! Display rules for analysis results: level profiles, category colors and
//! number formatting. Pure data and string helpers shared by the window and
//! the command-line tool.

use crate::service::{AnalysisResponse, ToxicityLevel};

/// How a toxicity level is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProfile {
    pub level: ToxicityLevel,
    /// Style hook, matching the classes used by the web front end.
    pub class_name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

static LEVEL_PROFILES: [LevelProfile; 4] = [
    LevelProfile {
        level: ToxicityLevel::Safe,
        class_name: "safe",
        icon: "✅",
        title: "Safe Comment",
        description: "This comment appears to be respectful and appropriate.",
    },
    LevelProfile {
        level: ToxicityLevel::Moderate,
        class_name: "moderate",
        icon: "⚠",
        title: "Potentially Problematic",
        description: "This comment may contain mildly inappropriate content.",
    },
    LevelProfile {
        level: ToxicityLevel::Toxic,
        class_name: "toxic",
        icon: "🚫",
        title: "Toxic Comment Detected",
        description: "This comment contains inappropriate or offensive content.",
    },
    LevelProfile {
        level: ToxicityLevel::HighlyToxic,
        class_name: "highly-toxic",
        icon: "⛔",
        title: "Highly Toxic Comment",
        description: "This comment contains severely offensive or harmful content.",
    },
];

/// Bar colors keyed by category name.
const CATEGORY_COLORS: [(&str, &str); 6] = [
    ("toxic", "#ef4444"),
    ("severe_toxic", "#dc2626"),
    ("obscene", "#f59e0b"),
    ("threat", "#8b5cf6"),
    ("insult", "#3b82f6"),
    ("identity_hate", "#ec4899"),
];

/// Color for categories missing from the table.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

/// Advisory appended when the service scored without its trained model.
pub const DEMO_MODE_NOTICE: &str =
    "⚡ Demo Mode: Using keyword-based detection. Train the service model for full ML predictions.";

pub fn level_profile(level: ToxicityLevel) -> &'static LevelProfile {
    LEVEL_PROFILES
        .iter()
        .find(|profile| profile.level == level)
        .unwrap_or(&LEVEL_PROFILES[3])
}

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// `severe_toxic` -> `Severe Toxic`.
pub fn humanize_category(category: &str) -> String {
    category
        .split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Score in [0, 1] as a percentage with one decimal and no sign, e.g. `87.3`.
///
/// Ties round up (`0.0025` -> `0.3`), matching the web client.
pub fn format_percentage(score: f64) -> String {
    let tenths = (score * 1000.0).round() / 10.0;
    format!("{tenths:.1}")
}

/// One row of the category breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBar {
    pub category: String,
    pub display_name: String,
    /// `87.3%`
    pub percentage: String,
    /// Fill width as a CSS length, always equal to `percentage`.
    pub fill_width: String,
    /// Fill as a fraction of the track, clamped to [0, 1].
    pub fill_fraction: f32,
    pub color: &'static str,
}

impl CategoryBar {
    pub fn new(category: &str, score: f64) -> Self {
        let percentage = format!("{}%", format_percentage(score));
        Self {
            category: category.to_string(),
            display_name: humanize_category(category),
            fill_width: percentage.clone(),
            percentage,
            fill_fraction: score.clamp(0.0, 1.0) as f32,
            color: category_color(category),
        }
    }
}

/// Everything the results panel shows for one response.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub profile: &'static LevelProfile,
    pub is_toxic: bool,
    /// `Toxicity Score: 87.3%`
    pub score_text: String,
    pub demo_notice: Option<&'static str>,
    pub bars: Vec<CategoryBar>,
}

impl ResultView {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        Self {
            profile: level_profile(response.level()),
            is_toxic: response.is_toxic,
            score_text: format!(
                "Toxicity Score: {}%",
                format_percentage(response.max_toxicity)
            ),
            demo_notice: response.demo_mode.then_some(DEMO_MODE_NOTICE),
            bars: response
                .predictions
                .iter()
                .map(|(category, score)| CategoryBar::new(category, score))
                .collect(),
        }
    }
}
