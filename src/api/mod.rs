//! Backend API Client
//!
//! One configured HTTP path to the REST backend: base URL resolution,
//! bearer-token injection, a 60s per-attempt timeout, retry with
//! exponential backoff for transient failures, and centralized error
//! classification. Domain modules expose one thin typed function per
//! endpoint.

mod error;

pub mod auth;
pub mod drivers;
pub mod locations;
pub mod orders;
pub mod payments;
pub mod ratings;
pub mod settings;
pub mod stats;
pub mod tickets;

pub use error::{ApiError, RetryPolicy, RETRY};

use std::sync::OnceLock;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::i18n::{translate, Locale};
use crate::storage;

/// Per-attempt timeout
const REQUEST_TIMEOUT_MS: u32 = 60_000;

/// Resolve the backend base URL: explicit override, then the browser host
/// on the backend port when not loopback, else local development default.
pub fn resolve_base_url(override_url: Option<&str>, hostname: Option<&str>) -> String {
    if let Some(url) = override_url {
        return url.trim_end_matches('/').to_string();
    }
    match hostname {
        Some(host) if !host.is_empty() && host != "localhost" && host != "127.0.0.1" => {
            format!("http://{host}:8000/api")
        }
        _ => "http://127.0.0.1:8000/api".to_string(),
    }
}

fn base_url() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();
    BASE_URL.get_or_init(|| {
        let hostname = web_sys::window().and_then(|w| w.location().hostname().ok());
        let url = resolve_base_url(option_env!("ADMIN_API_URL"), hostname.as_deref());
        web_sys::console::log_1(&format!("[api] backend: {url}").into());
        url
    })
}

/// `{message}` acknowledgement bodies returned by mutation endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message: String,
}

/// List endpoints answer either `{results, count}` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybePaged<T> {
    Paged { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> MaybePaged<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Paged { results } => results,
            Self::Plain(items) => items,
        }
    }
}

// ========================
// Request core
// ========================

async fn attempt_once<B>(
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<reqwest::Response, ApiError>
where
    B: Serialize + ?Sized,
{
    let url = format!("{}{}", base_url(), path);
    let client = reqwest::Client::new();
    let mut builder = client.request(method, &url);
    if !query.is_empty() {
        builder = builder.query(query);
    }
    if let Some(token) = storage::get(storage::AUTH_TOKEN) {
        builder = builder.header("Authorization", format!("Token {token}"));
    }
    if let Some(body) = body {
        builder = builder.json(body);
    }

    let request = builder.send();
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(request, timeout);
    let response = match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
        Either::Right(((), _)) => return Err(ApiError::Timeout),
    };

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.as_u16() == 401 {
        return Err(ApiError::Auth);
    }
    let message = response.text().await.unwrap_or_default();
    if status.is_client_error() {
        Err(ApiError::Client {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

pub(crate) async fn request<T, B>(
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let mut attempt = 1;
    loop {
        match attempt_once(method.clone(), path, query, body).await {
            Ok(response) => {
                return response
                    .json::<T>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()));
            }
            Err(error) => {
                log_failure(&method, path, &error, attempt);
                if matches!(error, ApiError::Auth) {
                    force_logout();
                    return Err(error);
                }
                match RETRY.next_delay_ms(attempt, &error) {
                    Some(delay) => {
                        TimeoutFuture::new(delay).await;
                        attempt += 1;
                    }
                    None => {
                        if error.is_retryable() {
                            alert_blocking(&error);
                        }
                        return Err(error);
                    }
                }
            }
        }
    }
}

fn log_failure(method: &Method, path: &str, error: &ApiError, attempt: u32) {
    web_sys::console::error_1(
        &format!(
            "[api] {method} {path} attempt {attempt}/{max} failed: status={status:?} {error}",
            max = RETRY.max_attempts,
            status = error.status(),
        )
        .into(),
    );
}

/// HTTP 401: clear persisted auth state and land on the login view
fn force_logout() {
    storage::clear_auth();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

/// Exhausted retries on a transient failure: blocking, localized alert
fn alert_blocking(error: &ApiError) {
    let locale = storage::get(storage::LOCALE)
        .map(|value| Locale::from_str(&value))
        .unwrap_or_default();
    let message = translate(locale, error.message_key());
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&message);
    }
}

// ========================
// Verb shorthands
// ========================

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Method::GET, path, &[], None).await
}

pub(crate) async fn get_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    request::<T, ()>(Method::GET, path, query, None).await
}

pub(crate) async fn post<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    request(Method::POST, path, &[], Some(body)).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Method::POST, path, &[], None).await
}

pub(crate) async fn put<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    request(Method::PUT, path, &[], Some(body)).await
}

pub(crate) async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Method::DELETE, path, &[], None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.uz/api/"), Some("192.168.1.5")),
            "https://api.example.uz/api"
        );
    }

    #[test]
    fn test_network_hostname_derives_backend_url() {
        assert_eq!(
            resolve_base_url(None, Some("192.168.1.5")),
            "http://192.168.1.5:8000/api"
        );
    }

    #[test]
    fn test_loopback_falls_back_to_local_default() {
        assert_eq!(resolve_base_url(None, Some("localhost")), "http://127.0.0.1:8000/api");
        assert_eq!(resolve_base_url(None, Some("127.0.0.1")), "http://127.0.0.1:8000/api");
        assert_eq!(resolve_base_url(None, None), "http://127.0.0.1:8000/api");
        assert_eq!(resolve_base_url(None, Some("")), "http://127.0.0.1:8000/api");
    }
}
