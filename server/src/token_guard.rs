//! Response headers for pages that receive a token in their URL.
//!
//! The client strips the token from the address bar right after boot, but
//! the first response still travels with it. That response must not be cached
//! and must not leak the URL through the `Referer` of any sub-request.

use axum::{
    extract::{Request, State},
    http::header::{CACHE_CONTROL, HeaderValue, REFERRER_POLICY},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Name of the query parameter carrying the token.
#[derive(Debug, Clone)]
pub struct TokenParam(pub Arc<str>);

/// True when `param` has a non-empty value in `query`. The first occurrence
/// decides, as on the client.
fn carries_token(query: &str, param: &str) -> bool {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == param)
        .is_some_and(|(_, value)| !value.is_empty())
}

pub async fn no_store_token_urls(
    State(TokenParam(param)): State<TokenParam>,
    req: Request,
    next: Next,
) -> Response {
    let carries_token = req
        .uri()
        .query()
        .is_some_and(|query| carries_token(query, &param));

    let mut response = next.run(req).await;
    if carries_token {
        let headers = response.headers_mut();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    }
    response
}
