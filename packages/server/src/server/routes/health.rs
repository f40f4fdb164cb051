use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Jasa Tukang Hemat API";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Health check endpoint
///
/// Liveness only: reports the process is serving, without probing the store.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
