//! Batch endpoint handlers.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::fetch::FetchError;
use crate::http::server::AppState;
use crate::http::validation::validate_batch;
use crate::observability::metrics;

/// Hold an admission ticket across the whole request.
///
/// The ticket is acquired before the body is read and released when the
/// response has been produced, whatever the outcome. A saturated gate
/// queues the request here, with no timeout of its own.
pub async fn admission_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let _ticket = state.gate.acquire().await;
    next.run(request).await
}

/// `POST /urls`: fan out one GET per submitted URL and return the bodies
/// keyed by input position.
pub async fn fetch_batch(
    State(state): State<AppState>,
    Json(urls): Json<Vec<String>>,
) -> Response {
    let started = Instant::now();
    let batch_id = Uuid::new_v4();

    tracing::debug!(
        batch_id = %batch_id,
        url_count = urls.len(),
        "Batch received"
    );

    let urls = match validate_batch(&urls, state.max_urls) {
        Ok(urls) => urls,
        Err(err) => {
            tracing::warn!(batch_id = %batch_id, error = %err, "Batch rejected");
            metrics::record_batch("rejected", started);
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    // Scope tied to this request: the guard cancels it when the handler is
    // dropped (client disconnect), and the parent token cancels it on
    // shutdown.
    let scope = state.scope.child_token();
    let _guard = scope.clone().drop_guard();

    match state.fetcher.fetch_all(&scope, urls).await {
        Ok(bodies) => {
            let payload: BTreeMap<String, String> = bodies
                .into_iter()
                .map(|(index, body)| (index.to_string(), body))
                .collect();
            metrics::record_batch("ok", started);
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(FetchError::Cancelled) => {
            tracing::debug!(batch_id = %batch_id, "Batch cancelled");
            metrics::record_batch("cancelled", started);
            // The client is gone or the process is draining; there is no
            // body worth writing.
            ().into_response()
        }
        Err(err) => {
            tracing::error!(batch_id = %batch_id, error = %err, "Batch failed");
            metrics::record_batch("failed", started);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
