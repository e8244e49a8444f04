mod support;

use support::http::{closed_port_url, serve_once};

use serde_json::Value;
use toxiscope::config::AppSettings;
use toxiscope::service::{
    AnalysisRequest, HttpPredictionService, PredictionService, ServiceError, ToxicityLevel,
};

const TOXIC_BODY: &str = r#"{
    "success": true,
    "text": "you idiot",
    "predictions": {"toxic": 0.873, "severe_toxic": 0.12, "obscene": 0.3, "insult": 0.77},
    "is_toxic": true,
    "max_toxicity": 0.873,
    "toxicity_level": "Toxic",
    "demo_mode": false,
    "timestamp": "2026-10-17T12:00:00"
}"#;

fn service_for(base_url: &str) -> HttpPredictionService {
    HttpPredictionService::new(&AppSettings::with_base_url(base_url).service)
}

fn request(text: &str) -> AnalysisRequest {
    AnalysisRequest::from_input(text).unwrap()
}

#[test]
fn predict_posts_json_and_parses_scores_in_order() {
    let (url, captured) = serve_once("200 OK", TOXIC_BODY);
    let response = service_for(&url).predict(&request("  you idiot ")).unwrap();

    let captured = captured.recv().unwrap();
    assert_eq!(captured.request_line, "POST /api/predict HTTP/1.1");
    let sent: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, serde_json::json!({"text": "you idiot"}));

    assert!(response.is_toxic);
    assert_eq!(response.level(), ToxicityLevel::Toxic);
    let categories: Vec<_> = response.predictions.iter().map(|(name, _)| name).collect();
    assert_eq!(categories, ["toxic", "severe_toxic", "obscene", "insult"]);
    assert_eq!(response.predictions.get("insult"), Some(0.77));
    assert_eq!(
        response.extra.get("timestamp").and_then(Value::as_str),
        Some("2026-10-17T12:00:00")
    );
}

#[test]
fn trailing_slash_in_base_url_is_ignored() {
    let (url, captured) = serve_once("200 OK", TOXIC_BODY);
    service_for(&format!("{url}/")).predict(&request("x")).unwrap();
    assert_eq!(
        captured.recv().unwrap().request_line,
        "POST /api/predict HTTP/1.1"
    );
}

#[test]
fn non_success_status_is_http_error() {
    let (url, _captured) = serve_once("500 Internal Server Error", r#"{"success": false}"#);
    let err = service_for(&url).predict(&request("x")).unwrap_err();
    assert_eq!(err, ServiceError::Http { status: 500 });
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[test]
fn application_failure_carries_server_message() {
    let (url, _captured) = serve_once(
        "200 OK",
        r#"{"success": false, "error": "Prediction failed: model missing"}"#,
    );
    let err = service_for(&url).predict(&request("x")).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Rejected("Prediction failed: model missing".to_string())
    );
}

#[test]
fn application_failure_without_message_uses_fallback() {
    let (url, _captured) = serve_once("200 OK", r#"{"success": false}"#);
    let err = service_for(&url).predict(&request("x")).unwrap_err();
    assert_eq!(err.to_string(), "An unknown error occurred");
}

#[test]
fn malformed_body_is_decode_error() {
    let (url, _captured) = serve_once("200 OK", "<html>oops</html>");
    let err = service_for(&url).predict(&request("x")).unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)), "{err:?}");
}

#[test]
fn refused_connection_is_transport_error() {
    let err = service_for(&closed_port_url())
        .predict(&request("x"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)), "{err:?}");
}

#[test]
fn stats_reports_model_state() {
    let (url, captured) = serve_once(
        "200 OK",
        r#"{"model_loaded": true, "demo_mode": false,
            "categories": ["toxic", "insult"],
            "endpoints": {"predict": "/api/predict"}}"#,
    );
    let stats = service_for(&url).stats().unwrap();
    assert_eq!(captured.recv().unwrap().request_line, "GET /api/stats HTTP/1.1");
    assert_eq!(stats.model_loaded, Some(true));
    assert_eq!(stats.demo_mode, Some(false));
    assert_eq!(stats.categories, ["toxic", "insult"]);
    assert!(stats.extra.contains_key("endpoints"));
}
