//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
}

/// Always reports `{"ok": true}` while the process can answer HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { ok: true })
}
