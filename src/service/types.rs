use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Body of `POST /api/predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    /// Build a request from raw input, or `None` when nothing is left after trimming.
    pub fn from_input(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }
}

/// Severity bucket the service derives from the per-category scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToxicityLevel {
    Safe,
    Moderate,
    Toxic,
    HighlyToxic,
}

impl ToxicityLevel {
    pub const ALL: [ToxicityLevel; 4] = [
        ToxicityLevel::Safe,
        ToxicityLevel::Moderate,
        ToxicityLevel::Toxic,
        ToxicityLevel::HighlyToxic,
    ];

    /// Map a server label onto a level. Anything unrecognized is treated as the
    /// most severe bucket, which also covers the server's `"Highly Toxic"`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Safe" => Self::Safe,
            "Moderate" => Self::Moderate,
            "Toxic" => Self::Toxic,
            _ => Self::HighlyToxic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Moderate => "Moderate",
            Self::Toxic => "Toxic",
            Self::HighlyToxic => "Highly Toxic",
        }
    }
}

/// Category scores in the order the service sent them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predictions(Vec<(String, f64)>);

impl Predictions {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, score)| *score)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Predictions {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, score)| (name.into(), score)).collect())
    }
}

impl Serialize for Predictions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, score) in &self.0 {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Predictions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PredictionsVisitor;

        impl<'de> Visitor<'de> for PredictionsVisitor {
            type Value = Predictions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category names to scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Predictions, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, score)) = access.next_entry::<String, f64>()? {
                    match entries.iter_mut().find(|(existing, _)| *existing == name) {
                        Some(entry) => entry.1 = score,
                        None => entries.push((name, score)),
                    }
                }
                Ok(Predictions(entries))
            }
        }

        deserializer.deserialize_map(PredictionsVisitor)
    }
}

/// Successful payload of `POST /api/predict`.
///
/// Fields beyond the ones the client reads (`text`, `timestamp`, ...) are kept
/// in `extra` so an export reproduces the payload as received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub predictions: Predictions,
    pub is_toxic: bool,
    pub max_toxicity: f64,
    pub toxicity_level: String,
    #[serde(default)]
    pub demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResponse {
    pub fn level(&self) -> ToxicityLevel {
        ToxicityLevel::from_label(&self.toxicity_level)
    }
}

/// Payload of `GET /api/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub demo_mode: Option<bool>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_blank_input() {
        assert!(AnalysisRequest::from_input("").is_none());
        assert!(AnalysisRequest::from_input("   \n\t ").is_none());
        let request = AnalysisRequest::from_input("  hello there \n").unwrap();
        assert_eq!(request.text, "hello there");
    }

    #[test]
    fn level_labels_cover_server_spellings() {
        assert_eq!(ToxicityLevel::from_label("Safe"), ToxicityLevel::Safe);
        assert_eq!(ToxicityLevel::from_label("Moderate"), ToxicityLevel::Moderate);
        assert_eq!(ToxicityLevel::from_label("Toxic"), ToxicityLevel::Toxic);
        assert_eq!(ToxicityLevel::from_label("Highly Toxic"), ToxicityLevel::HighlyToxic);
        assert_eq!(ToxicityLevel::from_label("HighlyToxic"), ToxicityLevel::HighlyToxic);
        assert_eq!(ToxicityLevel::from_label("??"), ToxicityLevel::HighlyToxic);
    }

    #[test]
    fn predictions_keep_wire_order() {
        let body = r#"{"threat": 0.1, "toxic": 0.9, "insult": 0.4}"#;
        let predictions: Predictions = serde_json::from_str(body).unwrap();
        let names: Vec<_> = predictions.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["threat", "toxic", "insult"]);
        assert_eq!(
            serde_json::to_string(&predictions).unwrap(),
            r#"{"threat":0.1,"toxic":0.9,"insult":0.4}"#
        );
    }

    #[test]
    fn response_keeps_unknown_fields() {
        let body = r#"{
            "success": true,
            "text": "hi",
            "predictions": {"toxic": 0.05},
            "is_toxic": false,
            "max_toxicity": 0.05,
            "toxicity_level": "Safe",
            "timestamp": "2026-10-17T10:00:00",
            "demo_mode": true
        }"#;
        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.level(), ToxicityLevel::Safe);
        assert_eq!(response.extra.get("text"), Some(&Value::from("hi")));
        let reencoded: Value = serde_json::to_value(&response).unwrap();
        let original: Value = serde_json::from_str(body).unwrap();
        assert_eq!(reencoded, original);
    }

    #[test]
    fn stats_without_model_flag_parse() {
        let stats: ServiceStats = serde_json::from_str(r#"{"endpoints": {}}"#).unwrap();
        assert_eq!(stats.model_loaded, None);
        assert!(stats.extra.contains_key("endpoints"));
    }
}
