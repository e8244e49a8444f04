use serde::Deserialize;

use crate::config::ServiceSettings;
use crate::http_client;

use super::{
    AnalysisRequest, AnalysisResponse, PredictionService, ServiceError, ServiceStats,
    UNKNOWN_ERROR_MESSAGE,
};

pub const PREDICT_PATH: &str = "/api/predict";
pub const STATS_PATH: &str = "/api/stats";

/// Blocking ureq client for the prediction service.
#[derive(Clone)]
pub struct HttpPredictionService {
    agent: ureq::Agent,
    base_url: String,
    max_response_bytes: usize,
}

impl HttpPredictionService {
    pub fn new(settings: &ServiceSettings) -> Self {
        Self {
            agent: http_client::build_agent(settings.timeout()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            max_response_bytes: settings.max_response_bytes,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn read_body(&self, response: ureq::Response) -> Result<Vec<u8>, ServiceError> {
        http_client::read_response_bytes(response, self.max_response_bytes)
            .map_err(|err| ServiceError::Decode(err.to_string()))
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ServiceError> {
        let url = self.endpoint(PREDICT_PATH);
        tracing::debug!(%url, chars = request.text.chars().count(), "Sending analysis request");
        let response = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_json(request)
            .map_err(map_call_error)?;
        let body = self.read_body(response)?;
        parse_predict_body(&body)
    }

    fn stats(&self) -> Result<ServiceStats, ServiceError> {
        let url = self.endpoint(STATS_PATH);
        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_call_error)?;
        let body = self.read_body(response)?;
        serde_json::from_slice(&body).map_err(|err| ServiceError::Decode(err.to_string()))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn map_call_error(error: ureq::Error) -> ServiceError {
    match error {
        ureq::Error::Status(status, _) => ServiceError::Http { status },
        ureq::Error::Transport(err) => ServiceError::Transport(err.to_string()),
    }
}

/// Outcome fields read before committing to the full payload.
#[derive(Deserialize)]
struct PredictOutcome {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

/// Split an application-level rejection from a scored payload.
///
/// The payload is decoded straight from the body bytes so `predictions`
/// keeps the key order the service sent.
pub(crate) fn parse_predict_body(body: &[u8]) -> Result<AnalysisResponse, ServiceError> {
    let outcome: PredictOutcome =
        serde_json::from_slice(body).map_err(|err| ServiceError::Decode(err.to_string()))?;
    if outcome.success != Some(true) {
        let message = outcome
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        return Err(ServiceError::Rejected(message));
    }
    serde_json::from_slice(body).map_err(|err| ServiceError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_body_uses_server_error() {
        let err = parse_predict_body(br#"{"success": false, "error": "Text cannot be empty."}"#)
            .unwrap_err();
        assert_eq!(err, ServiceError::Rejected("Text cannot be empty.".into()));
        assert_eq!(err.to_string(), "Text cannot be empty.");
    }

    #[test]
    fn rejected_body_without_error_falls_back() {
        let err = parse_predict_body(br#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
        let err = parse_predict_body(br#"{"predictions": {}}"#).unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn success_body_missing_scores_is_a_decode_error() {
        let err = parse_predict_body(br#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
        let err = parse_predict_body(b"<html>").unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[test]
    fn parsed_body_keeps_prediction_order_from_the_wire() {
        let body = br#"{
            "success": true,
            "text": "x",
            "predictions": {"toxic": 0.9, "severe_toxic": 0.2, "obscene": 0.4, "insult": 0.7},
            "is_toxic": true,
            "max_toxicity": 0.9,
            "toxicity_level": "Highly Toxic"
        }"#;
        let response = parse_predict_body(body).unwrap();
        let names: Vec<_> = response.predictions.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["toxic", "severe_toxic", "obscene", "insult"]);
        let exported = serde_json::to_string(&response.predictions).unwrap();
        assert_eq!(
            exported,
            r#"{"toxic":0.9,"severe_toxic":0.2,"obscene":0.4,"insult":0.7}"#
        );
    }

    #[test]
    fn http_error_text_names_status() {
        assert_eq!(
            ServiceError::Http { status: 503 }.to_string(),
            "HTTP error! status: 503"
        );
    }

    #[test]
    fn endpoint_joins_onto_trimmed_base() {
        let settings = ServiceSettings {
            base_url: "http://localhost:5000/".to_string(),
            ..ServiceSettings::default()
        };
        let service = HttpPredictionService::new(&settings);
        assert_eq!(service.base_url(), "http://localhost:5000");
        assert_eq!(
            service.endpoint(PREDICT_PATH),
            "http://localhost:5000/api/predict"
        );
    }
}
