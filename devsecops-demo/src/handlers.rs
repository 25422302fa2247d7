use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::dtos::{HealthResponse, SumaRequest, SumaResponse};
use crate::error::Result;

/// Reports that the service is up.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Adds the two operands in the request body.
///
/// Any binding failure (no body, empty body, malformed JSON, wrong field
/// types, or a non-JSON content type) is reported as a 400 before the sum runs.
pub async fn suma(
    payload: std::result::Result<Json<SumaRequest>, JsonRejection>,
) -> Result<Json<SumaResponse>> {
    let Json(request) = payload.inspect_err(|rejection| {
        tracing::debug!(status = %rejection.status(), "rejected suma body: {}", rejection.body_text());
    })?;

    let resultado = request.sum();
    tracing::debug!(a = request.a, b = request.b, resultado, "computed suma");
    Ok(Json(SumaResponse { resultado }))
}
