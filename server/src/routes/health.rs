//! Liveness probe.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use axum::http::StatusCode;

/// `GET /healthz`: always 200 while the process is serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
