//! Redirects plain-HTTP requests to their HTTPS equivalent.

use axum::extract::{Request, State};
use axum::http::header::HOST;
use axum::http::uri::Authority;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Answers non-HTTPS requests with `307 Temporary Redirect` to `https_port`.
///
/// Requests that already arrived over HTTPS, either directly or through a
/// proxy setting `X-Forwarded-Proto: https`, continue to the router. So do
/// requests whose `Host` header can't be parsed, since no target can be built.
pub async fn redirect_to_https(
    State(https_port): State<u16>,
    request: Request,
    next: Next,
) -> Response {
    if is_https(&request) {
        return next.run(request).await;
    }

    match https_location(&request, https_port) {
        Some(location) => {
            tracing::debug!(%location, "redirecting to https");
            Redirect::temporary(&location).into_response()
        }
        None => next.run(request).await,
    }
}

fn is_https(request: &Request) -> bool {
    if request.uri().scheme_str() == Some("https") {
        return true;
    }
    request
        .headers()
        .get(X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

fn https_location(request: &Request, https_port: u16) -> Option<String> {
    let authority = match request.uri().authority() {
        Some(authority) => authority.clone(),
        None => request
            .headers()
            .get(HOST)?
            .to_str()
            .ok()?
            .parse::<Authority>()
            .ok()?,
    };

    let port = if https_port == 443 {
        String::new()
    } else {
        format!(":{https_port}")
    };
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Some(format!("https://{}{}{}", authority.host(), port, path_and_query))
}
