//! HTTP round trips through the full router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use collatz_backend::config::ServerConfig;
use collatz_backend::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::default())
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, text) = get_text(app, uri).await;
    (status, serde_json::from_str(&text).unwrap())
}

// =========================================================
// Health
// =========================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =========================================================
// Single number
// =========================================================

#[tokio::test]
async fn test_number_six() {
    let (status, body) = get_json(app(), "/collatz/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 6);
    assert_eq!(body["sequence"], json!([6, 3, 5, 8, 4, 2, 1]));
    assert_eq!(body["binary_sequence"][0], "110");
    assert_eq!(body["iterations"], 6);
    assert_eq!(body["max_value"], 8);
    assert_eq!(body["shortcut_count"], 2);
    assert_eq!(body["largest_grow_seq"], 2);
    assert_eq!(body["closure_point"], 5);
}

#[tokio::test]
async fn test_number_one() {
    let (status, body) = get_json(app(), "/collatz/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "number": 1,
            "iterations": 0,
            "max_value": 1,
            "shortcut_count": 0,
            "sum_values": 0.0,
            "largest_grow_seq": 0,
            "sequence": [1],
            "binary_sequence": ["1"],
            "closure_point": 1
        })
    );
}

#[tokio::test]
async fn test_number_zero_is_bad_request() {
    let (status, body) = get_json(app(), "/collatz/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_non_integer_path_is_bad_request() {
    for uri in ["/collatz/abc", "/collatz/-5", "/collatz/range/1/x"] {
        let (status, body) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_peak_above_u64_is_served_exactly() {
    // Parsed as a Value the peak would degrade to f64; check the raw text.
    let (status, text) = get_text(app(), "/collatz/23035537407").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains(r#""number":23035537407,"#));
    assert!(text.contains(r#""iterations":526,"#));
    assert!(text.contains(r#""max_value":34419078320774113520,"#));
    assert!(text.contains(r#""closure_point":5"#));
}

#[tokio::test]
async fn test_largest_start_is_served() {
    let mut config = ServerConfig::default();
    config.limits.max_number = u64::MAX;
    let app = create_router(AppState::new(config));

    let (status, text) = get_text(app, &format!("/collatz/{}", u64::MAX)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains(&format!(r#""number":{},"#, u64::MAX)));
}

// =========================================================
// Range
// =========================================================

#[tokio::test]
async fn test_range_one_to_ten() {
    let (status, body) = get_json(app(), "/collatz/range/1/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["range"], json!([1, 10]));
    assert_eq!(body["details"].as_array().unwrap().len(), 10);
    assert_eq!(body["max_iterations"], json!({"number": 9, "iterations": 13}));
    assert_eq!(body["max_value"], json!({"number": 7, "value": 26}));
    assert!(body["max_shortcut"]["count"].is_u64());
    assert!(body["max_sum_values"]["sum"].is_f64());
    assert!(body["max_grow_seq"]["value"].is_u64());
}

#[tokio::test]
async fn test_range_reversed_is_bad_request() {
    let (status, _) = get_json(app(), "/collatz/range/10/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_range_span_limit() {
    let mut config = ServerConfig::default();
    config.limits.max_range_span = 5;
    let app = create_router(AppState::new(config));

    let (status, body) = get_json(app.clone(), "/collatz/range/1/6").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("maximum is 5"));

    let (status, _) = get_json(app, "/collatz/range/1/5").await;
    assert_eq!(status, StatusCode::OK);
}

// =========================================================
// 6n±1
// =========================================================

#[tokio::test]
async fn test_sixn() {
    let (status, body) = get_json(app(), "/collatz/sixn/1/10").await;
    assert_eq!(status, StatusCode::OK);

    let numbers: Vec<u64> = body["numbers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 5, 7]);
    assert_eq!(body["numbers"][1]["type"], "6n±1");
    assert_eq!(body["stats"]["avg_iterations"], 5.0);
    assert_eq!(body["stats"]["max_iterations_number"], 7);
    assert_eq!(
        body["stats"]["closure_distribution"],
        json!({"1": 1, "5": 1, "8": 1})
    );
}

#[tokio::test]
async fn test_sixn_empty_set() {
    let (status, body) = get_json(app(), "/collatz/sixn/2/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numbers"], json!([]));
    assert_eq!(body["stats"]["total_numbers"], 0);
    assert!(body["stats"]["avg_iterations"].is_u64());
    assert_eq!(body["stats"]["avg_iterations"], json!(0));
    assert_eq!(body["stats"]["closure_distribution"], json!({}));
}

// =========================================================
// Visualization
// =========================================================

#[tokio::test]
async fn test_visualization() {
    let (status, body) = get_json(app(), "/collatz/visualization/1/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["range"], json!([1, 7]));

    let items = body["visualizationData"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(
        items[0],
        json!({
            "n": 1,
            "multiplyChain": [1],
            "finalEven": null,
            "divCount": null,
            "timesStayedOdd": 0
        })
    );
    assert_eq!(
        items[3],
        json!({
            "n": 7,
            "multiplyChain": [7, 11, 17],
            "finalEven": 26,
            "divCount": 1,
            "timesStayedOdd": 2
        })
    );
}

// =========================================================
// Middleware
// =========================================================

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/collatz/5")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_identical_requests_are_byte_identical() {
    let fetch = || async {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/collatz/sixn/1/300")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    };
    assert_eq!(fetch().await, fetch().await);
}
