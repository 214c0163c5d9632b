use actix_web::{http::StatusCode, test, web, App};
use url_decomposer::api::configure;
use url_decomposer::api::models::{AppState, HealthStatus, ParseRequest, ReconstructRequest, ReconstructResponse};
use url_decomposer::{ParseResult, UrlPartType};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_parse_endpoint_returns_components() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/parse")
        .set_json(ParseRequest { url: "https://a.com/?x=1&x=2".to_string() })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ParseResult = test::read_body_json(resp).await;
    assert_eq!(body.error, None);
    let search: Vec<_> = body
        .parts
        .iter()
        .filter(|p| p.part_type == UrlPartType::Search)
        .map(|p| p.value.as_str())
        .collect();
    assert_eq!(search, vec!["1", "2"]);
}

#[actix_web::test]
async fn test_parse_endpoint_rejects_invalid_url() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/parse")
        .set_json(ParseRequest { url: "not a url, just text".to_string() })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid URL format");
    assert_eq!(body["parts"], serde_json::json!([]));
}

#[actix_web::test]
async fn test_reconstruct_after_toggle() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/parse")
        .set_json(ParseRequest { url: "https://example.com:8080/path#top".to_string() })
        .to_request();
    let mut parsed: ParseResult = test::call_and_read_body_json(&app, req).await;

    for part in parsed.parts.iter_mut() {
        if part.part_type == UrlPartType::Hostname {
            part.is_enabled = false;
        }
    }

    let req = test::TestRequest::post()
        .uri("/reconstruct")
        .set_json(ReconstructRequest { parts: parsed.parts })
        .to_request();
    let body: ReconstructResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.url, "https://:8080/path#top");
}

#[actix_web::test]
async fn test_reconstruct_accepts_presentation_json() {
    let app = app!();
    let payload = serde_json::json!({
        "parts": [
            { "id": "a1", "type": "protocol", "value": "http:", "isEnabled": true, "label": "Protocol" },
            { "id": "b2", "type": "hostname", "value": "localhost", "isEnabled": true, "label": "Hostname" },
            { "id": "c3", "type": "search", "key": "q", "value": "a b", "isEnabled": true, "label": "Query Param" },
            { "id": "d4", "type": "hash", "value": "#x", "isEnabled": false, "label": "Fragment" }
        ]
    });
    let req = test::TestRequest::post().uri("/reconstruct").set_json(payload).to_request();
    let body: ReconstructResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.url, "http://localhost?q=a+b");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: HealthStatus = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.status, "healthy");
}
