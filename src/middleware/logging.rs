//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// How a finished request is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Ok,
    ClientError,
    ServerError,
}

impl Outcome {
    /// 404s are routine lookups and are not escalated
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            Self::ClientError
        } else {
            Self::Ok
        }
    }
}

/// Log method, path, status and latency of every request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match Outcome::of(response.status()) {
        Outcome::ServerError => warn!(
            %method, %path, status, %duration_ms,
            "Request completed with server error"
        ),
        Outcome::ClientError => warn!(
            %method, %path, status, %duration_ms,
            "Request completed with client error"
        ),
        Outcome::Ok => info!(%method, %path, status, %duration_ms, "Request completed"),
    }

    response
}
