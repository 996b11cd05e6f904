use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};
use warehouse_match::api::{configure, ApiState};
use warehouse_match::config::ServerConfig;
use warehouse_match::store::{StoreBuilder, WarehouseStore};
use warehouse_match::warehouse::{OperatingStatus, OwnershipCertificate, WarehouseId, WarehouseRecord};

fn make_record(
    id: &str,
    district: &str,
    pricing: f64,
    size_sqft: u64,
    occupancy: f64,
    certificate: OwnershipCertificate,
) -> WarehouseRecord {
    WarehouseRecord {
        wh_id: WarehouseId::new(id),
        address: format!("Market Yard, {district}"),
        district: district.to_string(),
        state: "MAHARASHTRA".to_string(),
        capacity: 2000,
        status: OperatingStatus::Active,
        occupancy,
        pricing,
        warehouse_type: "Industrial logistics parks".to_string(),
        ownership_certificate: certificate,
        size_sqft,
        image: String::new(),
        rating: 4.5,
        reviews: 12,
    }
}

fn test_store() -> WarehouseStore {
    StoreBuilder::new()
        .build(vec![
            make_record("WH-1", "Pune", 6.5, 120_000, 0.2, OwnershipCertificate::Verified),
            make_record("WH-2", "Nagpur", 4.0, 30_000, 0.9, OwnershipCertificate::Unverified),
            make_record("WH-3", "Satara", 7.0, 60_000, 0.5, OwnershipCertificate::Verified),
        ])
        .unwrap()
}

fn test_state() -> ApiState {
    let config = ServerConfig {
        ping_message: "pong".to_string(),
        ..ServerConfig::v0()
    };
    ApiState::new(test_store(), config)
}

#[actix_web::test]
async fn recommend_returns_ranked_items() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({
            "preferences": {
                "district": "Pune",
                "targetPrice": 6.5,
                "minAreaSqft": 60000,
                "preferredType": "Industrial logistics parks",
                "preferVerified": true,
                "preferAvailability": true
            },
            "limit": 2
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let items = body["items"].as_array().expect("items must be an array");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["whId"], "WH-1");
    assert_eq!(items[0]["matchScore"], 100);
    assert_eq!(items[0]["reasons"][0]["label"], "Located in preferred district Pune");
    assert_eq!(items[0]["availableAreaSqft"], 96000);
    assert_eq!(items[1]["whId"], "WH-3");
}

#[actix_web::test]
async fn recommend_without_body_uses_default_limit() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    let req = test::TestRequest::post().uri("/api/recommend").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn recommend_with_non_positive_limit_is_empty() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    for limit in [json!(0), json!(-4)] {
        let req = test::TestRequest::post()
            .uri("/api/recommend")
            .set_json(json!({ "preferences": {}, "limit": limit }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "items": [] }));
    }
}

#[actix_web::test]
async fn recommend_rejects_malformed_json() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .insert_header(ContentType::json())
        .set_payload("{\"preferences\": {")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn recommend_get_explains_usage() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    let req = test::TestRequest::get().uri("/api/recommend").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Use POST with JSON body to get recommendations.");
    assert_eq!(body["example"]["preferences"]["district"], "Pune");
    assert_eq!(body["example"]["limit"], 5);
}

#[actix_web::test]
async fn ping_uses_configured_message() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    let req = test::TestRequest::get().uri("/api/ping").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "message": "pong" }));
}

#[actix_web::test]
async fn health_reports_dataset() {
    let state = test_state();
    let version = state.store.version().as_str().to_string();
    let app = test::init_service(App::new().configure(configure(state))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["ok"], true);
    assert_eq!(body["warehouses"], 3);
    assert_eq!(body["datasetVersion"], version.as_str());
    let time = body["time"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok(), "time {time}");
}

#[actix_web::test]
async fn stats_summarize_catalog() {
    let app = test::init_service(App::new().configure(configure(test_state()))).await;

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalWarehouses"], 3);
    assert_eq!(body["verifiedWarehouses"], 2);
    assert_eq!(body["districts"], json!(["Nagpur", "Pune", "Satara"]));
    assert_eq!(body["totalArea"], 210_000);
}
