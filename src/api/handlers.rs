use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::api::error::ApiError;
use crate::api::ApiState;
use crate::types::preferences::RecommendationRequest;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse<'a> {
    ok: bool,
    time: DateTime<Utc>,
    dataset_version: &'a str,
    warehouses: usize,
}

/// Payload shown to callers that hit the recommend endpoint with GET.
pub fn example_request() -> Value {
    json!({
        "preferences": {
            "district": "Pune",
            "targetPrice": 6.5,
            "minAreaSqft": 60000,
            "preferredType": "Industrial logistics parks",
            "preferVerified": true,
            "preferAvailability": true
        },
        "limit": 5
    })
}

/// An empty body means "no preferences, default limit".
fn parse_request(body: &[u8]) -> Result<RecommendationRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RecommendationRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}

pub async fn recommend(
    state: web::Data<ApiState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request = parse_request(&body)?;
    let limit = request.resolved_limit(state.config.default_limit);

    let store = Arc::clone(&state.store);
    let ranker = Arc::clone(&state.ranker);
    let response = web::block(move || ranker.recommend(&store, &request.preferences, limit))
        .await
        .map_err(|e| {
            error!(error = %e, "/api/recommend error");
            ApiError::RecommendationFailed
        })?;

    Ok(HttpResponse::Ok().json(response))
}

pub async fn recommend_usage() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({
        "message": "Use POST with JSON body to get recommendations.",
        "example": example_request(),
    }))
}

pub async fn ping(state: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": state.config.ping_message }))
}

pub async fn health(state: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        time: Utc::now(),
        dataset_version: state.store.version().as_str(),
        warehouses: state.store.len(),
    })
}

pub async fn stats(state: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.summary())
}
