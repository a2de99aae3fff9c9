//! Integration tests for the directions client (wiremock-based)

use std::time::Duration;

use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, DirectionsRequest, ErrorKind,
    HttpDirectionsClient, LocationInput, compare_modes, with_deadline,
};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

fn config_for_mock(server: &MockServer) -> DirectionsConfig {
    DirectionsConfig::for_testing(format!("{}{DIRECTIONS_PATH}", server.uri()))
}

fn client_for_mock(server: &MockServer) -> HttpDirectionsClient {
    HttpDirectionsClient::new(config_for_mock(server)).unwrap()
}

fn place_id_request() -> DirectionsRequest {
    DirectionsRequest::new(LocationInput::place_id("from"), LocationInput::place_id("to"))
        .with_mode("walk")
}

fn sample_directions_json() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "routes": [{
            "summary": "Main",
            "warnings": ["test"],
            "legs": [{
                "distance": {"text": "1 km", "value": 1000},
                "duration": {"text": "10 mins", "value": 600},
                "start_address": "Start",
                "end_address": "End",
                "steps": [{
                    "html_instructions": "Head <b>north</b>",
                    "distance": {"text": "0.2 km", "value": 200},
                    "duration": {"text": "2 mins", "value": 120},
                    "travel_mode": "WALKING"
                }]
            }]
        }]
    })
}

#[tokio::test]
async fn test_directions_with_place_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("origin", "place_id:from"))
        .and(query_param("destination", "place_id:to"))
        .and(query_param("mode", "walking"))
        .and(query_param("units", "metric"))
        .and(query_param("key", "test-key"))
        .and(query_param_is_missing("language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap();

    assert_eq!(response.mode, "WALKING");
    assert_eq!(response.distance_meters, 1000);
    assert_eq!(response.duration_seconds, 600);
    assert_eq!(response.summary, "Main");
    assert_eq!(response.warnings, vec!["test".to_string()]);
    assert_eq!(response.steps.len(), 1);
    assert_eq!(response.steps[0].instruction, "Head north");
}

#[tokio::test]
async fn test_directions_with_coordinates_and_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("origin", "52.520000,13.405000"))
        .and(query_param("destination", "Alexanderplatz, Berlin"))
        .and(query_param("mode", "bicycling"))
        .and(query_param("language", "de"))
        .and(query_param("region", "DE"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let request = DirectionsRequest::new(
        LocationInput::coordinate(52.52, 13.405),
        LocationInput::text("  Alexanderplatz, Berlin "),
    )
    .with_mode("Bicycle")
    .with_language("de")
    .with_region("DE")
    .with_units("Imperial");

    let response = client_for_mock(&server).directions(request).await.unwrap();
    assert_eq!(response.mode, "BICYCLING");
}

#[tokio::test]
async fn test_with_client_uses_given_http_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(header("user-agent", "wayfarer-tests/1.0"))
        .and(query_param("origin", "place_id:from"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .user_agent("wayfarer-tests/1.0")
        .build()
        .unwrap();
    let client = HttpDirectionsClient::with_client(http, config_for_mock(&server)).unwrap();

    let response = client.directions(place_id_request()).await.unwrap();
    assert_eq!(response.mode, "WALKING");
    assert_eq!(response.distance_meters, 1000);
}

#[test]
fn test_with_client_rejects_invalid_config() {
    let config = DirectionsConfig {
        base_url: String::new(),
        ..DirectionsConfig::for_testing("http://127.0.0.1:9")
    };
    let result = HttpDirectionsClient::with_client(reqwest::Client::new(), config);
    assert!(matches!(result, Err(DirectionsError::ConfigurationError(_))));
}

#[tokio::test]
async fn test_base_url_query_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("channel", "beta"))
        .and(query_param("origin", "place_id:from"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = DirectionsConfig::for_testing(format!(
        "{}{DIRECTIONS_PATH}?channel=beta",
        server.uri()
    ));
    let client = HttpDirectionsClient::new(config).unwrap();

    assert!(client.directions(place_id_request()).await.is_ok());
}

#[tokio::test]
async fn test_validation_error_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(0)
        .mount(&server)
        .await;

    let request = DirectionsRequest::new(
        LocationInput {
            text: Some("A".to_string()),
            place_id: Some("B".to_string()),
            coordinate: None,
        },
        LocationInput::text("C"),
    );

    let err = client_for_mock(&server).directions(request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("from"));
}

#[tokio::test]
async fn test_api_error_keeps_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("  forbidden\n"))
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    match err {
        DirectionsError::Api { status_code, body } => {
            assert_eq!(status_code, 403);
            assert_eq!(body, "forbidden");
        },
        other => unreachable!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_body_is_not_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(sample_directions_json()))
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Api { status_code: 500, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_error_status_with_empty_body_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();

    match err {
        DirectionsError::Api { status_code, body } => {
            assert_eq!(status_code, 503);
            assert!(body.is_empty());
        },
        other => unreachable!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_body_is_distinct_from_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::Decode(_)));
}

#[tokio::test]
async fn test_body_beyond_limit_is_not_read() {
    let server = MockServer::start().await;

    let mut body = sample_directions_json().to_string();
    body.push_str(&" ".repeat(4096));
    body.push_str("trailing garbage");

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let valid_len = sample_directions_json().to_string().len();
    let config = DirectionsConfig {
        max_body_bytes: valid_len + 16,
        ..config_for_mock(&server)
    };
    let client = HttpDirectionsClient::new(config).unwrap();

    let response = client.directions(place_id_request()).await.unwrap();
    assert_eq!(response.distance_meters, 1000);
}

#[tokio::test]
async fn test_zero_results_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ZERO_RESULTS", "routes": []})),
        )
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ProviderRejected);
    assert!(err.to_string().contains("ZERO_RESULTS"));
}

#[tokio::test]
async fn test_ok_without_routes_is_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "OK", "routes": []})),
        )
        .mount(&server)
        .await;

    let err = client_for_mock(&server)
        .directions(place_id_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoResults);
}

#[tokio::test]
async fn test_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_directions_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = DirectionsConfig {
        timeout_secs: 1,
        ..config_for_mock(&server)
    };
    let client = HttpDirectionsClient::new(config).unwrap();

    let err = client.directions(place_id_request()).await.unwrap_err();
    assert!(matches!(err, DirectionsError::Timeout { timeout_secs: 1 }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_caller_deadline_cancels_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_directions_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let deadline = tokio::time::Instant::now() + Duration::from_millis(100);

    let err = with_deadline(deadline, client.directions(place_id_request()))
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::DeadlineExceeded));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1
    let config = DirectionsConfig::for_testing("http://127.0.0.1:1/maps/api/directions/json");
    let client = HttpDirectionsClient::new(config).unwrap();
    let err = client.directions(place_id_request()).await.unwrap_err();
    assert!(matches!(err, DirectionsError::Transport(_)));
}

#[tokio::test]
async fn test_compare_modes_issues_two_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("mode", "walking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("mode", "transit"))
        .and(query_param("origin", "place_id:from"))
        .and(query_param("destination", "place_id:to"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let comparison = compare_modes(&client, place_id_request(), "TRANSIT")
        .await
        .unwrap();

    assert_eq!(comparison.primary.mode, "WALKING");
    assert_eq!(comparison.alternate.mode, "TRANSIT");
}

#[tokio::test]
async fn test_compare_same_mode_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = compare_modes(&client, place_id_request(), "walking")
        .await
        .unwrap_err();

    assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("compare"));
}

#[tokio::test]
async fn test_compare_second_failure_fails_whole_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("mode", "walking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("mode", "driving"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = compare_modes(&client, place_id_request(), "drive")
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Api { status_code: 503, .. }));
}
