use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use lowstock_catalog::Catalog;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 404 for an unrecognized item name. The body enumerates every known item
/// so the caller can correct its request.
pub fn unknown_item(catalog: &Catalog) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({
            "error": "item_not_found",
            "message": "item not found in inventory",
            "availableItems": catalog.item_names(),
        })),
    )
        .into_response()
}
