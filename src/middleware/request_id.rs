//! Request correlation middleware.
//!
//! Every inbound request gets a fresh UUID v4 identifier, regardless
//! of any id the client sent. The id is stored in the request
//! extensions as [`RequestId`] for handlers to log against, echoed
//! back in the `X-Request-ID` response header, and written into a
//! start record and a completion record, so one id ties the
//! client-visible response to every log line for that request.
//!
//! The middleware adds no resilience of its own: downstream error
//! responses are stamped and logged like any other response, while a
//! downstream panic unwinds past both the header and the completion
//! record.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request correlation id, stored in the request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    req.extensions_mut().insert(RequestId(id.clone()));

    tracing::info!("Request started: {} {} (request_id: {})", method, path, id);

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!("Request completed: {} {} (request_id: {})", method, path, id);

    response
}
