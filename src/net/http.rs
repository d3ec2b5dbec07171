//! JSON HTTP helpers for talking to the backend REST API.
//!
//! Client-side (hydrate): real fetches via `gloo-net`, with JSON and
//! same-origin credentials applied to every call.
//! Server-side (SSR): stubs returning transport errors, since requests are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into [`RequestError`] and logged with its
//! method and URL before being returned; callers decide what a failure
//! means for the UI. Responses outside the 2xx range are failures, and a
//! request is abandoned after [`REQUEST_TIMEOUT_MS`] so a stalled backend
//! cannot wedge a submit flow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use thiserror::Error;

/// Deadline applied to every request.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// HTTP methods used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Uppercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Why a request failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Server answered outside the 2xx range.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The fetch itself failed (connection refused, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the JSON the caller expected.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No response within [`REQUEST_TIMEOUT_MS`].
    #[error("request timed out")]
    Timeout,
}

impl RequestError {
    /// Whether the failure is connectivity-shaped rather than a server
    /// verdict on the request.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

/// Outcome of an API call.
pub type RequestResult<T> = Result<T, RequestError>;

/// Perform `method` on `url` with an optional JSON `body`.
///
/// # Errors
///
/// Classified per [`RequestError`]; see the module docs.
pub async fn request<B: Serialize>(
    method: Method,
    url: &str,
    body: Option<&B>,
) -> RequestResult<serde_json::Value> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let builder = gloo_net::http::RequestBuilder::new(url)
            .method(gloo_method(method))
            .header("Content-Type", "application/json")
            .credentials(web_sys::RequestCredentials::SameOrigin);
        let req = match body {
            Some(payload) => builder.json(payload),
            None => builder.build(),
        }
        .map_err(|e| fail(method, url, RequestError::Network(e.to_string())))?;

        let deadline =
            gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));
        let response = match select(Box::pin(req.send()), Box::pin(deadline)).await {
            Either::Left((sent, _)) => {
                sent.map_err(|e| fail(method, url, RequestError::Network(e.to_string())))?
            }
            Either::Right(_) => return Err(fail(method, url, RequestError::Timeout)),
        };
        if !response.ok() {
            return Err(fail(method, url, RequestError::Status(response.status())));
        }
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| fail(method, url, RequestError::Decode(e.to_string())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(RequestError::Network("not available on server".to_owned()))
    }
}

/// `GET url`.
///
/// # Errors
///
/// See [`request`].
pub async fn get(url: &str) -> RequestResult<serde_json::Value> {
    request::<serde_json::Value>(Method::Get, url, None).await
}

/// `POST url` with a JSON payload.
///
/// # Errors
///
/// See [`request`].
pub async fn post<B: Serialize>(url: &str, payload: &B) -> RequestResult<serde_json::Value> {
    request(Method::Post, url, Some(payload)).await
}

/// `PUT url` with a JSON payload.
///
/// # Errors
///
/// See [`request`].
pub async fn put<B: Serialize>(url: &str, payload: &B) -> RequestResult<serde_json::Value> {
    request(Method::Put, url, Some(payload)).await
}

/// `DELETE url`.
///
/// # Errors
///
/// See [`request`].
pub async fn delete(url: &str) -> RequestResult<serde_json::Value> {
    request::<serde_json::Value>(Method::Delete, url, None).await
}

/// Log a failure with its request line, then hand the error back.
#[cfg(any(test, feature = "hydrate"))]
fn fail(method: Method, url: &str, error: RequestError) -> RequestError {
    leptos::logging::warn!("{} {url} failed: {error}", method.as_str());
    error
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}
