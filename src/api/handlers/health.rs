//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::health::HealthData;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether the manifest can be read.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: storage readable
/// - **503 Service Unavailable**: storage could not be read (e.g. corrupt manifest)
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "data": { "version": "0.1.0", "storage": "file", "links": 42 }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<HealthData>>, AppError> {
    let links = state.link_service.count().await.map_err(|e| {
        tracing::warn!(error = %e, "health check failed");
        AppError::unavailable(format!(
            "{} storage unavailable",
            state.link_service.storage_kind()
        ))
    })?;

    Ok(Json(Envelope::ok(HealthData {
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.link_service.storage_kind().to_string(),
        links,
    })))
}
