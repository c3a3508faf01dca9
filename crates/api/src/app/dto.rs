//! Request/response DTOs for the scan endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Bulk scan request as assembled by the front end.
///
/// The caller is trusted to have grouped `items` into `items_by_supplier`
/// already; no per-item catalog re-validation happens here. Suppliers land
/// in a `BTreeMap` so the outbound message fields have a deterministic order
/// regardless of caller key order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkScanRequest {
    pub items: Vec<String>,
    pub items_by_supplier: BTreeMap<String, Vec<String>>,
    pub total_count: usize,
    pub timestamp: String,
}

/// Acknowledgment returned after a successful bulk dispatch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkScanAck {
    pub success: bool,
    pub message: String,
    pub items_count: usize,
}
