// Permissive CORS for the portal frontend.
//
// The captive-portal page is served from the router itself, so every
// origin may call with credentials, and all headers/methods are exposed.
// Applied as plain middleware so error responses carry the headers too.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub async fn permissive_cors(req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();

    // Preflights never reach a handler.
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        apply_headers(resp.headers_mut(), origin);
        return resp;
    }

    let mut resp = next.run(req).await;
    apply_headers(resp.headers_mut(), origin);
    resp
}

fn apply_headers(headers: &mut HeaderMap, origin: Option<HeaderValue>) {
    // Credentialed requests require the origin echoed back, not `*`.
    let allow_origin = origin.unwrap_or_else(|| HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("*"),
    );
}
