//! Integration tests for the Practitioner Directory Server.
//!
//! These tests build the Axum router against an injected directory (no
//! upstream fetch, no network) and exercise the HTTP endpoints through
//! `tower::ServiceExt::oneshot`. The fixture records are deliberately
//! heterogeneous so the whole normalize-then-query pipeline is covered
//! end to end.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

use meddir_core::normalize_all;
use meddir_server::config::Config;
use meddir_server::directory::Directory;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Raw records in the assorted shapes the live feed produces.
fn sample_records() -> Vec<JsonValue> {
    vec![
        json!({
            "id": "d1",
            "name": "Dr. Asha Rao",
            "photo": "asha.jpg",
            "specialities": ["Dentist"],
            "fees": "₹ 500",
            "experience": "10 Years of experience",
            "video_consult": true,
            "in_clinic": false,
            "clinic": {"name": "Smile Studio", "locality": "Koramangala"}
        }),
        json!({
            "id": 2,
            "name": "Dr. Vikram Bhatt",
            "specialties": "ENT",
            "fees": 300,
            "experience": 20,
            "in_clinic": 1,
            "location": "Indiranagar"
        }),
        json!({
            "name": "Dr. Meera Chawla",
            "specialities": [{"name": "Dermatologist"}, "Dentist"],
            "fees": "₹300",
            "experience": "5 years",
            "video_consult": true,
            "in_clinic": true
        }),
        // Entirely malformed entry: must still become a listed practitioner
        json!({"garbage": true}),
    ]
}

fn test_config() -> Config {
    Config {
        bind_address: "0.0.0.0:0".to_string(),
        data_url: String::new(), // unused, the directory is injected
        cors_origins: vec!["*".to_string()],
        rate_limit_rps: 1000,
    }
}

/// Build the app router over the sample directory.
fn test_app() -> Router {
    let directory = Directory::from_practitioners(normalize_all(&sample_records()));
    meddir_server::build_app(directory, &test_config())
}

/// Build the app router in the terminal post-fetch-failure state.
fn unavailable_app() -> Router {
    let directory = Directory::Unavailable {
        reason: "Failed to load practitioners. Please try again later.".into(),
    };
    meddir_server::build_app(directory, &test_config())
}

/// Send a request to the app and return (status, body as JSON).
async fn request(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };

    (status, body)
}

/// Build a GET request.
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn names(body: &JsonValue) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let (status, body) = request(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["practitioners"], 4);
}

#[tokio::test]
async fn test_health_unavailable() {
    let app = unavailable_app();

    let (status, body) = request(&app, get("/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert!(body["reason"].as_str().unwrap().contains("Failed to load"));
}

#[tokio::test]
async fn test_unfiltered_listing_preserves_feed_order() {
    let app = test_app();

    let (status, body) = request(&app, get("/api/practitioners")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(
        names(&body),
        vec![
            "Dr. Asha Rao",
            "Dr. Vikram Bhatt",
            "Dr. Meera Chawla",
            "Unknown Doctor"
        ]
    );
    assert_eq!(body["link"][0]["relation"], "self");
    assert_eq!(body["link"][0]["url"], "/api/practitioners");
}

#[tokio::test]
async fn test_normalization_is_visible_through_the_api() {
    let app = test_app();

    let (_, body) = request(&app, get("/api/practitioners")).await;
    let results = body["results"].as_array().unwrap();

    // Currency string and embedded-duration fields parsed
    assert_eq!(results[0]["fees"], 500);
    assert_eq!(results[0]["experience"], 10);
    // Numeric id coerced, scalar specialty wrapped
    assert_eq!(results[1]["id"], "2");
    assert_eq!(results[1]["specialties"], json!(["ENT"]));
    // Object specialty coerced via its name
    assert_eq!(results[2]["specialties"], json!(["Dermatologist", "Dentist"]));
    // Malformed record degraded to defaults instead of disappearing
    assert_eq!(results[3]["name"], "Unknown Doctor");
    assert_eq!(results[3]["fees"], 0);
    assert!(
        results[3]["image"]
            .as_str()
            .unwrap()
            .starts_with("/placeholder.svg")
    );
}

#[tokio::test]
async fn test_search_filter() {
    let app = test_app();

    let (status, body) = request(&app, get("/api/practitioners?search=rao")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(names(&body), vec!["Dr. Asha Rao"]);
}

#[tokio::test]
async fn test_consultation_mode_filter() {
    let app = test_app();

    let (_, body) = request(
        &app,
        get("/api/practitioners?consultationType=Video%20Consult"),
    )
    .await;
    assert_eq!(names(&body), vec!["Dr. Asha Rao", "Dr. Meera Chawla"]);

    let (_, body) = request(&app, get("/api/practitioners?consultationType=In%20Clinic")).await;
    assert_eq!(names(&body), vec!["Dr. Vikram Bhatt", "Dr. Meera Chawla"]);
}

#[tokio::test]
async fn test_specialty_filter_is_a_union() {
    let app = test_app();

    let (_, body) = request(&app, get("/api/practitioners?specialties=Dentist,ENT")).await;

    assert_eq!(
        names(&body),
        vec!["Dr. Asha Rao", "Dr. Vikram Bhatt", "Dr. Meera Chawla"]
    );
}

#[tokio::test]
async fn test_fee_sort_is_stable() {
    let app = test_app();

    let (_, body) = request(&app, get("/api/practitioners?sortBy=fees-low-to-high")).await;

    // Bhatt and Chawla tie at 300; feed order between them must survive
    assert_eq!(
        names(&body),
        vec![
            "Unknown Doctor",
            "Dr. Vikram Bhatt",
            "Dr. Meera Chawla",
            "Dr. Asha Rao"
        ]
    );
}

#[tokio::test]
async fn test_experience_sort_descending() {
    let app = test_app();

    let (_, body) = request(&app, get("/api/practitioners?sortBy=experience")).await;

    let experience: Vec<_> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["experience"].as_u64().unwrap())
        .collect();
    assert_eq!(experience, vec![20, 10, 5, 0]);
}

#[tokio::test]
async fn test_no_matches_is_a_valid_empty_listing() {
    let app = test_app();

    let (status, body) = request(&app, get("/api/practitioners?search=nobody")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_self_link_is_canonical() {
    let app = test_app();

    // Empty markers are dropped, foreign keys kept, owned values re-encoded
    let (_, body) = request(
        &app,
        get("/api/practitioners?search=&consultationType=Video%20Consult&utm_source=news"),
    )
    .await;

    assert_eq!(
        body["link"][0]["url"],
        "/api/practitioners?consultationType=Video+Consult&utm_source=news"
    );
}

#[tokio::test]
async fn test_unknown_filter_values_decode_as_unset() {
    let app = test_app();

    let (status, body) = request(
        &app,
        get("/api/practitioners?consultationType=telepathy&sortBy=shoe-size"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["link"][0]["url"], "/api/practitioners");
}

#[tokio::test]
async fn test_suggestions() {
    let app = test_app();

    // All three "Dr." names match, in feed order
    let (status, body) = request(&app, get("/api/suggestions?search=dr")).await;
    assert_eq!(status, StatusCode::OK);
    let suggested: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        suggested,
        vec!["Dr. Asha Rao", "Dr. Vikram Bhatt", "Dr. Meera Chawla"]
    );

    // Blank or missing terms yield nothing
    let (_, body) = request(&app, get("/api/suggestions?search=%20%20")).await;
    assert!(body.as_array().unwrap().is_empty());
    let (_, body) = request(&app, get("/api/suggestions")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_specialty_catalog() {
    let app = test_app();

    let (status, body) = request(&app, get("/api/specialties")).await;

    assert_eq!(status, StatusCode::OK);
    let catalog: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().to_string())
        .collect();

    // Known list plus discovered entries, sorted, no duplicates
    assert!(catalog.contains(&"Dentist".to_string()));
    assert!(catalog.contains(&"Ayurveda".to_string()));
    assert_eq!(catalog.iter().filter(|s| *s == "Dentist").count(), 1);
    let mut sorted = catalog.clone();
    sorted.sort();
    assert_eq!(catalog, sorted);
}

#[tokio::test]
async fn test_unavailable_directory_is_terminal_on_every_data_route() {
    let app = unavailable_app();

    for uri in ["/api/practitioners", "/api/suggestions?search=dr", "/api/specialties"] {
        let (status, body) = request(&app, get(uri)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "unavailable");
        assert!(body["message"].as_str().unwrap().contains("Failed to load"));
    }
}

#[tokio::test]
async fn test_request_id_header() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/health"))
        .await
        .expect("Request failed");
    assert!(response.headers().contains_key("X-Request-ID"));

    // A caller-supplied id is propagated
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("X-Request-ID", "trace-me-7")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.expect("Request failed");
    assert_eq!(
        response.headers().get("X-Request-ID").unwrap(),
        "trace-me-7"
    );
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/metrics"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}
