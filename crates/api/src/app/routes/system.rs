use axum::{http::StatusCode, response::IntoResponse, Json};

/// Liveness probe with a quick endpoint map for manual testing.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "endpoints": {
                "scan": "/api/scan?item=Sugar",
                "bulk": "POST /api/scan/bulk",
            },
        })),
    )
}
