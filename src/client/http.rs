//! Resilient request core.
//!
//! Every outbound call goes through [`ApiClient::request`], which layers the
//! behaviors the rest of the crate relies on:
//!
//! - per-request timeout (default 30s) that aborts the underlying request
//! - bearer-token attachment according to the request's [`AuthMode`]
//! - a single session refresh plus a single re-send when the server answers
//!   401 to an authenticated request
//! - exponential backoff retry for transient failures (see [`crate::retry`])
//! - classified errors, reported to the telemetry sink before being returned
//!
//! Bodies are `serde_json::Value`s rather than raw `reqwest::Body`s so they
//! stay clonable across retry attempts.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::auth::{AuthMode, SessionProvider};
use crate::error::{ApiError, Result};
use crate::retry::{with_retry, RetryPolicy};
use crate::telemetry::{ErrorReporter, RequestContext, TracingReporter};

/// Per-request knobs. The defaults match the common case: anonymous,
/// 30-second timeout, transient failures retried.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    pub auth: AuthMode,
    pub timeout: Duration,
    pub retries: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            auth: AuthMode::None,
            timeout: Duration::from_millis(30_000),
            retries: true,
        }
    }
}

impl RequestOptions {
    /// Options for endpoints that require a signed-in user.
    pub fn authed() -> Self {
        Self { auth: AuthMode::Required, ..Default::default() }
    }

    /// Options for endpoints that accept guests but personalize when a
    /// session is present.
    pub fn optional_auth() -> Self {
        Self { auth: AuthMode::Optional, ..Default::default() }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn without_retries(mut self) -> Self {
        self.retries = false;
        self
    }
}

/// Decoded response body.
///
/// 204 and bodiless responses become `Empty`, JSON content types are
/// parsed, anything else is passed through as text.
#[derive(Debug, Clone)]
pub enum Payload {
    Empty,
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => serde_json::from_value(value)
                .map_err(|e| ApiError::unknown(format!("unexpected response shape: {e}"))),
            Payload::Empty => Err(ApiError::unknown("expected a response body, got none")),
            Payload::Text(_) => Err(ApiError::unknown("expected a JSON response body")),
        }
    }
}

/// HTTP client with timeout, auth, refresh, and retry behavior.
pub struct ApiClient {
    base_url: String,
    http: Client,
    session: Arc<dyn SessionProvider>,
    retry: RetryPolicy,
    reporter: Arc<dyn ErrorReporter>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionProvider>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
            session,
            retry: RetryPolicy::default(),
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request and return its decoded payload.
    ///
    /// Terminal errors are handed to the telemetry reporter with the
    /// request's method and URL, then returned unchanged.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Payload> {
        let url = self.url_for(path);
        let result = if options.retries {
            with_retry(
                &self.retry,
                || self.execute_once(&method, &url, body.as_ref(), &options),
                ApiError::is_retryable,
            )
            .await
        } else {
            self.execute_once(&method, &url, body.as_ref(), &options).await
        };

        if let Err(err) = &result {
            let context = RequestContext { method: method.clone(), url };
            self.reporter.report(err, &context);
        }
        result
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request_typed(Method::GET, path, None, options).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T> {
        let body = to_body(body)?;
        self.request_typed(Method::POST, path, Some(body), options).await
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T> {
        let body = to_body(body)?;
        self.request_typed(Method::PATCH, path, Some(body), options).await
    }

    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request_typed(Method::DELETE, path, None, options).await
    }

    /// DELETE where success carries no body (204).
    pub async fn delete_empty(&self, path: &str, options: RequestOptions) -> Result<()> {
        self.request(Method::DELETE, path, None, options).await?;
        Ok(())
    }

    async fn request_typed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        let context = RequestContext {
            method: method.clone(),
            url: self.url_for(path),
        };
        let payload = self.request(method, path, body, options).await?;
        payload.decode().map_err(|err| {
            self.reporter.report(&err, &context);
            err
        })
    }

    /// One full attempt: resolve the token, send, and handle a 401 with a
    /// single refresh-and-resend. Never loops; the 401 path produces
    /// non-retryable Auth errors, so the generic retry wrapper stays out of
    /// it too.
    async fn execute_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<Payload> {
        let token = match options.auth {
            AuthMode::Required => match self.session.access_token().await? {
                Some(token) => Some(token),
                None => {
                    tracing::error!("authenticated request to {url} without a session");
                    return Err(ApiError::auth("no session token available, sign in required"));
                }
            },
            AuthMode::Optional => self.session.access_token().await.ok().flatten(),
            AuthMode::None => None,
        };

        let response = self
            .send(method, url, body, token.as_deref(), options.timeout)
            .await?;

        let auth_in_play = token.is_some() || options.auth == AuthMode::Required;
        if response.status() == StatusCode::UNAUTHORIZED && auth_in_play {
            tracing::debug!("401 from {url}, attempting session refresh");
            let refreshed = self
                .session
                .refresh()
                .await
                .map_err(|e| ApiError::auth(format!("session refresh failed: {e}")))?;
            let Some(new_token) = refreshed else {
                return Err(ApiError::auth("session expired and could not be refreshed"));
            };
            let retried = self
                .send(method, url, body, Some(&new_token), options.timeout)
                .await?;
            return Self::read_payload(retried).await;
        }

        Self::read_payload(response).await
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Response> {
        let mut request = self.http.request(method.clone(), url).timeout(timeout);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .json(body);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request.send().await.map_err(ApiError::from)
    }

    async fn read_payload(response: Response) -> Result<Payload> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body, status);
            return Err(if status == StatusCode::UNAUTHORIZED {
                ApiError::auth(message)
            } else {
                ApiError::api(status.as_u16(), message)
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Payload::Empty);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await.map_err(ApiError::from)?;
        if text.is_empty() {
            return Ok(Payload::Empty);
        }
        if is_json {
            let value = serde_json::from_str(&text)
                .map_err(|e| ApiError::unknown(format!("invalid JSON in response: {e}")))?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(text))
        }
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::unknown(format!("failed to serialize request body: {e}")))
}

/// Best-effort message out of an error body: a JSON `message` field (string
/// or array of strings), then a JSON `error` field, then the raw text, then
/// the status line.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("message") {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Array(parts)) => {
                let joined = parts
                    .iter()
                    .filter_map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                if !joined.is_empty() {
                    return joined;
                }
            }
            _ => {}
        }
        if let Some(Value::String(s)) = value.get("error") {
            if !s.is_empty() {
                return s.clone();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status.canonical_reason().unwrap_or("request failed").to_string()
}
