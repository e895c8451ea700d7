//! Text analysis route handlers.

use aura_core::{analyze, AnalysisRequest, AnalysisResult};
use axum::{extract::rejection::JsonRejection, Json};
use tracing::debug;

use crate::error::ApiError;

pub async fn process_text(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(status = %rejection.status(), "Rejected analysis request");
        ApiError::from(rejection)
    })?;

    let result = analyze(&req.text);
    debug!(
        chars = req.text.chars().count(),
        keywords = result.keywords.len(),
        sentiment = result.sentiment,
        "Analyzed text"
    );

    Ok(Json(result))
}
