//! Request pipeline wrapping every REST call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network failure since the
//! dashboard API is only reachable from the browser.
//!
//! PIPELINE
//! ========
//! Outbound, every call is decorated with `Authorization: Bearer <value>`
//! from the credential store (session token first, CI API key as the
//! standing alternative). Inbound, every response is normalized into the
//! unwrapped envelope payload or one [`ApiError`]:
//!
//! - non-2xx status → classified by status code; 401 additionally clears
//!   the persisted token and forces a full navigation to the login page,
//!   bypassing the router;
//! - 2xx with envelope `code != 200` → logical failure carrying the
//!   server message; credentials untouched;
//! - no response / timeout / undecodable body → network failure.
//!
//! Failures are surfaced to the user here, at the pipeline boundary, via
//! the [`Notify`] capability, so callers can add local handling without
//! duplicating the toast. Nothing is retried.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::Envelope;
use crate::state::toast::Toasts;
#[cfg(feature = "hydrate")]
use crate::util::credentials;
use crate::util::guard;

/// API base URL, overridable at build time via `API_BASE_URL`.
pub const BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api/v1",
};

/// Envelope code designating success.
pub const OK_CODE: i64 = 200;

/// Fixed ceiling applied to every outbound call.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Fallback text when the server supplies no message.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Classified failure for a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized, please sign in again")]
    Unauthorized,
    #[error("Access denied")]
    Forbidden,
    #[error("The requested resource does not exist")]
    NotFound,
    #[error("Internal server error")]
    ServerError,
    /// Any other HTTP status; `message` prefers the server-supplied text.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// No response at all: connectivity loss, timeout, or an unreadable body.
    #[error("Network error, please check your connection")]
    Network,
    /// Well-formed envelope with a non-success code.
    #[error("{message}")]
    Api { code: i64, message: String },
}

/// How the pipeline reports a failure to the user.
///
/// Background refreshes pass [`Notify::Log`] so a failing profile or list
/// fetch does not raise a toast; everything else toasts.
#[derive(Clone, Copy)]
pub enum Notify {
    Toast(Toasts),
    Log,
}

/// Join `path` onto the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Classify a non-2xx HTTP status, preferring the server-supplied message
/// for statuses outside the fixed taxonomy.
pub fn classify_status(status: u16, server_message: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        500 => ApiError::ServerError,
        other => ApiError::Http {
            status: other,
            message: server_message.unwrap_or_else(|| format!("{GENERIC_FAILURE}: {other}")),
        },
    }
}

/// Strip the response envelope: `code == 200` yields the payload, any
/// other code is a logical failure carrying the embedded message.
pub fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<Option<T>, ApiError> {
    if envelope.code == OK_CODE {
        Ok(envelope.data)
    } else {
        let message = if envelope.message.is_empty() {
            GENERIC_FAILURE.to_owned()
        } else {
            envelope.message
        };
        Err(ApiError::Api { code: envelope.code, message })
    }
}

/// Reject an envelope whose `data` was omitted when a payload is required.
pub fn require_data<T>(data: Option<T>) -> Result<T, ApiError> {
    data.ok_or(ApiError::Network)
}

/// Whether a 401 should force navigation to the login page from
/// `current_path`. Exactly one hard redirect per failing request, and
/// none when the user is already there.
pub fn login_redirect_needed(current_path: &str) -> bool {
    current_path != guard::LOGIN_PATH
}

/// GET a JSON envelope.
pub async fn get<T: DeserializeOwned>(notify: Notify, path: &str) -> Result<Option<T>, ApiError> {
    dispatch::<(), T>("GET", path, None, notify).await
}

/// POST a JSON body, receive a JSON envelope.
pub async fn post<B: Serialize, T: DeserializeOwned>(
    notify: Notify,
    path: &str,
    body: &B,
) -> Result<Option<T>, ApiError> {
    dispatch("POST", path, Some(body), notify).await
}

/// PUT a JSON body, receive a JSON envelope.
pub async fn put<B: Serialize, T: DeserializeOwned>(
    notify: Notify,
    path: &str,
    body: &B,
) -> Result<Option<T>, ApiError> {
    dispatch("PUT", path, Some(body), notify).await
}

/// DELETE, receive a JSON envelope.
pub async fn delete<T: DeserializeOwned>(notify: Notify, path: &str) -> Result<Option<T>, ApiError> {
    dispatch::<(), T>("DELETE", path, None, notify).await
}

/// GET a raw body (file downloads). The error path is classified exactly
/// like the JSON calls.
pub async fn get_bytes(notify: Notify, path: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = perform_bytes(path).await;
        if let Err(error) = &result {
            settle_failure(path, error, notify);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notify, path);
        Err(ApiError::Network)
    }
}

/// POST multipart form data (file uploads). The browser sets the
/// multipart boundary header itself.
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(
    notify: Notify,
    path: &str,
    form: &web_sys::FormData,
) -> Result<Option<T>, ApiError> {
    let result = perform_form(path, form).await;
    if let Err(error) = &result {
        settle_failure(path, error, notify);
    }
    result
}

async fn dispatch<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<&B>,
    notify: Notify,
) -> Result<Option<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = perform(method, path, body).await;
        if let Err(error) = &result {
            settle_failure(path, error, notify);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body, notify);
        Err(ApiError::Network)
    }
}

/// Inbound side effects for a failed call: 401 tears the session down,
/// then the failure is either toasted or logged.
#[cfg(feature = "hydrate")]
fn settle_failure(path: &str, error: &ApiError, notify: Notify) {
    if *error == ApiError::Unauthorized {
        expire_session();
    }
    match notify {
        Notify::Toast(toasts) => toasts.error(error.to_string()),
        Notify::Log => leptos::logging::warn!("request to {path} failed: {error}"),
    }
}

/// Clear the persisted token and hard-navigate to the login page. This is
/// a full `window.location` navigation, not a router transition: it must
/// fire regardless of which call was in flight and cannot be intercepted
/// by route guards.
#[cfg(feature = "hydrate")]
fn expire_session() {
    credentials::clear_token();
    let current = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    if login_redirect_needed(&current) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(guard::LOGIN_PATH);
        }
    }
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let creds = credentials::load();
    match creds.bearer() {
        Some(bearer) => builder.header("Authorization", &format!("Bearer {bearer}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn perform<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<&B>,
) -> Result<Option<T>, ApiError> {
    let url = api_url(path);
    let builder = authorize(match method {
        "POST" => gloo_net::http::Request::post(&url),
        "PUT" => gloo_net::http::Request::put(&url),
        "DELETE" => gloo_net::http::Request::delete(&url),
        _ => gloo_net::http::Request::get(&url),
    });
    let request = match body {
        Some(payload) => builder.json(payload).map_err(|_| ApiError::Network)?,
        None => builder.build().map_err(|_| ApiError::Network)?,
    };
    let response = race_timeout(request.send()).await?;
    read_envelope(response).await
}

#[cfg(feature = "hydrate")]
async fn perform_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> Result<Option<T>, ApiError> {
    let url = api_url(path);
    let builder = authorize(gloo_net::http::Request::post(&url));
    let request = builder.body(form.clone()).map_err(|_| ApiError::Network)?;
    let response = race_timeout(request.send()).await?;
    read_envelope(response).await
}

#[cfg(feature = "hydrate")]
async fn perform_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    let url = api_url(path);
    let builder = authorize(gloo_net::http::Request::get(&url));
    let request = builder.build().map_err(|_| ApiError::Network)?;
    let response = race_timeout(request.send()).await?;
    if !response.ok() {
        return Err(classify_response(&response).await);
    }
    response.binary().await.map_err(|_| ApiError::Network)
}

/// Race the fetch against the fixed timeout; expiry classifies as a
/// network failure, never as a 401.
#[cfg(feature = "hydrate")]
async fn race_timeout(
    send: impl std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(send, timeout);
    match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|_| ApiError::Network),
        Either::Right(((), _)) => Err(ApiError::Network),
    }
}

#[cfg(feature = "hydrate")]
async fn read_envelope<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<Option<T>, ApiError> {
    if !response.ok() {
        return Err(classify_response(&response).await);
    }
    let envelope: Envelope<T> = response.json().await.map_err(|_| ApiError::Network)?;
    unwrap_envelope(envelope)
}

#[cfg(feature = "hydrate")]
async fn classify_response(response: &gloo_net::http::Response) -> ApiError {
    let server_message = response
        .json::<Envelope<serde_json::Value>>()
        .await
        .ok()
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty());
    classify_status(response.status(), server_message)
}
