//! HTTP server configuration and request routing.
//!
//! Requests flow through middleware in order:
//! 1. CORS headers (applied to every response, including errors)
//! 2. Request ID generation
//! 3. Request/response logging
//! 4. Timeout enforcement (30s)
//! 5. Submission handler

mod cors;

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::any;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span, warn};
use uuid::Uuid;

pub use cors::CorsHeaders;

use crate::submission::{Reply, SubmissionHandler};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the router: a single submission route plus the middleware stack.
///
/// Every method is routed to the handler, which applies its own method gate
/// so that disallowed methods get the JSON error body.
pub fn create_router(handler: SubmissionHandler, cors: CorsHeaders) -> Router {
    Router::new()
        .route("/", any(submit))
        .fallback(not_found)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(inject_request_id))
        .layer(middleware::from_fn_with_state(cors, cors::apply_cors_headers))
        .with_state(handler)
}

async fn submit(
    State(handler): State<SubmissionHandler>,
    method: Method,
    body: Bytes,
) -> Reply {
    handler.handle(&method, &body).await
}

async fn not_found() -> Reply {
    Reply::error(StatusCode::NOT_FOUND, "Not found")
}

/// Per-request id, stored in request extensions and echoed as X-Request-Id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Root span for one request. Carries the id so log lines match the header.
fn request_span(req: &Request) -> Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map_or("", |id| id.0.as_str());
    info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id,
    )
}

/// Middleware to inject request ID into all responses.
///
/// Adds X-Request-Id header so operators can match a caller's report to logs.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}

/// Binds to `addr` and serves `app` until Ctrl+C or SIGTERM.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("HTTP server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    warn!("Waiting for in-flight requests to complete");
}
