use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use lowstock_notify::{bulk_low_stock_alert, low_stock_alert};

use crate::app::{dto, errors, AppState};

#[derive(Debug, Deserialize)]
pub struct ScanParams {
    item: Option<String>,
}

/// Plain (non-preflight) OPTIONS on the scan endpoints. Preflight requests
/// are answered by the CORS layer before they reach the router.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn scan_single(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ScanParams>,
) -> axum::response::Response {
    let name = match params.item.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "missing_item",
                "item query parameter is required, e.g. /api/scan?item=Sugar",
            );
        }
    };

    let item = match state.catalog.resolve(name) {
        Some(item) => item,
        None => return errors::unknown_item(&state.catalog),
    };

    tracing::info!(item = %item.name, supplier = %item.supplier, "low stock scan");

    let message = low_stock_alert(
        &item.name,
        &item.supplier,
        state.config.mention_user_id.as_deref(),
        Utc::now(),
    );

    // Best-effort: the scan succeeds for the caller even when delivery fails.
    state.webhook.send_best_effort(&message).await;

    Redirect::temporary(&state.config.redirect_target()).into_response()
}

pub async fn scan_bulk(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::BulkScanRequest>,
) -> axum::response::Response {
    if body.items.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_items",
            "items must be a non-empty list",
        );
    }

    if !state.webhook.is_configured() {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "webhook_not_configured",
            "webhook URL is not configured",
        );
    }

    let timestamp = if body.timestamp.is_empty() {
        Utc::now().to_rfc3339()
    } else {
        body.timestamp.clone()
    };

    let message = bulk_low_stock_alert(
        &body.items_by_supplier,
        body.total_count,
        &timestamp,
        state.config.mention_user_id.as_deref(),
    );

    // Unlike the single path, bulk dispatch failures surface to the caller:
    // there is no redirect to fall back to.
    if let Err(e) = state.webhook.send(&message).await {
        tracing::error!("bulk webhook dispatch failed: {e}");
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "dispatch_failed",
            e.to_string(),
        );
    }

    tracing::info!(count = body.total_count, "bulk low stock alert sent");

    (
        StatusCode::OK,
        Json(dto::BulkScanAck {
            success: true,
            message: format!("Bulk alert sent for {} items", body.total_count),
            items_count: body.total_count,
        }),
    )
        .into_response()
}
