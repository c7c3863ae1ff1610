//! HTTP client wrapper.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! forwarded and a deadline enforced by racing the request against a timer.
//! Server-side (SSR) and native tests: [`BrowserTransport`] fails every
//! request, so pages degrade to their unauthenticated state.
//!
//! Every call runs request interception, the transport, [`classify`] and
//! the response [`policy`](super::policy) in that order.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::classify::classify;
use super::policy::{self, Navigator, Notifier};
use super::types::ApiEnvelope;
use crate::config::ClientConfig;
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// API path relative to the base URL, e.g. `/user/get/login`.
    pub path: String,
    /// Absolute URL.
    pub url: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

/// Status and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why no usable response arrived.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),
    #[error("HTTP status {0} with empty body")]
    Status(u16),
}

/// Sends one request and reports the raw result.
pub trait Transport {
    fn send(
        &self,
        request: &ApiRequest,
        config: &ClientConfig,
    ) -> impl Future<Output = Result<RawResponse, TransportFailure>>;
}

/// `fetch`-backed transport used by the app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest, config: &ClientConfig) -> Result<RawResponse, TransportFailure> {
        #[cfg(feature = "hydrate")]
        {
            send_with_fetch(request, config).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, config);
            Err(TransportFailure::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_fetch(request: &ApiRequest, config: &ClientConfig) -> Result<RawResponse, TransportFailure> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use web_sys::{AbortController, RequestCredentials};

    let controller = AbortController::new().map_err(|_| TransportFailure::Network("AbortController unavailable".to_owned()))?;
    let signal = controller.signal();

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    builder = builder
        .credentials(if config.with_credentials { RequestCredentials::Include } else { RequestCredentials::SameOrigin })
        .abort_signal(Some(&signal));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match &request.body {
        Some(body) => builder.json(body).map_err(network_failure)?,
        None => builder.build().map_err(network_failure)?,
    };

    let exchange = async move {
        let resp = prepared.send().await.map_err(network_failure)?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    };
    let timer = gloo_timers::future::sleep(config.timeout);
    futures::pin_mut!(exchange);
    futures::pin_mut!(timer);

    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            controller.abort();
            Err(TransportFailure::Timeout(config.timeout_ms()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn network_failure(e: impl std::fmt::Display) -> TransportFailure {
    TransportFailure::Network(e.to_string())
}

/// Request interceptor. Requests currently pass through unchanged; this is
/// where an auth header would be attached.
pub fn intercept_request(request: ApiRequest) -> ApiRequest {
    request
}

/// The application's HTTP client: fixed base endpoint, timeout and
/// credential forwarding, with centralized error surfacing.
#[derive(Clone)]
pub struct HttpClient<T = BrowserTransport> {
    config: Arc<ClientConfig>,
    transport: T,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(config: ClientConfig, transport: T, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self { config: Arc::new(config), transport, notifier, navigator }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET` `path` and decode the envelope.
    ///
    /// # Errors
    ///
    /// Returns the rejection produced by the response policy, or
    /// [`ApiError::Decode`] if a success envelope has the wrong shape.
    pub async fn get<D: DeserializeOwned>(&self, path: &str) -> Result<ApiEnvelope<D>, ApiError> {
        self.execute(self.request(Method::Get, path, None)).await
    }

    /// `POST` a JSON body to `path` and decode the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized, the
    /// rejection produced by the response policy, or [`ApiError::Decode`].
    pub async fn post<B, D>(&self, path: &str, body: &B) -> Result<ApiEnvelope<D>, ApiError>
    where
        B: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(self.request(Method::Post, path, Some(body))).await
    }

    fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiRequest {
        ApiRequest { method, path: path.to_owned(), url: self.config.url(path), body, headers: Vec::new() }
    }

    async fn execute<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<ApiEnvelope<D>, ApiError> {
        let request = intercept_request(request);
        let result = self.transport.send(&request, &self.config).await;
        let outcome = classify(result);
        let body = policy::apply(outcome, &request.path, self.notifier.as_ref(), self.navigator.as_ref())?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
