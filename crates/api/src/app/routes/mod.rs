use axum::{
    routing::{get, post},
    Router,
};

pub mod scan;
pub mod system;

/// Router for the scan endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/scan", get(scan::scan_single).options(scan::preflight))
        .route("/scan/bulk", post(scan::scan_bulk).options(scan::preflight))
}
