use axum::Json;
use contracts::system::health::HealthResponse;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
