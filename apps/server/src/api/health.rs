use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

/// Liveness probe.
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
