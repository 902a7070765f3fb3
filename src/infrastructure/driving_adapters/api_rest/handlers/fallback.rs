//! Fallback Handler

use axum::http::{Method, Uri};
use axum::Extension;

use crate::infrastructure::driving_adapters::api_rest::middleware::RequestId;
use crate::shared::errors::{catalog, AppError};

/// Any unmatched route
pub async fn route_not_found(
    method: Method,
    uri: Uri,
    request_id: Option<Extension<RequestId>>,
) -> AppError {
    let request_id = request_id.map(|Extension(id)| id.0);
    tracing::debug!(%method, %uri, request_id = request_id.as_deref(), "No route matched");
    catalog::ROUTE_NOT_FOUND
}
