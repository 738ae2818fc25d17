//! Transport seam between the dispatcher and the network.
//!
//! # Design
//! The session is a capability handed in by the caller. The dispatcher never
//! assumes the obligation to tear down a client it did not create: a host
//! application (a Discord bot, say) can lend its own `reqwest::Client`
//! through [`ReqwestSession::from_client`] and keep control of its
//! lifecycle, or let the dispatcher build a private one.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, StatusCode};

use crate::error::ApiError;

/// Per-call options carried alongside a `Route`: headers, body, timeout.
/// Query parameters are not part of this — they live in the route's URL.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `value` as the JSON request body and set the content type.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_vec(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(Self {
            headers,
            body: Some(Bytes::from(body)),
            timeout: None,
        })
    }
}

/// A raw HTTP response as seen by the transport, before the dispatcher
/// interprets the status code.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Failures below the HTTP layer: the request never produced a response.
#[derive(Debug)]
pub enum SessionError {
    /// The transport's timeout elapsed before a response arrived.
    Timeout,

    /// The connection could not be established.
    Connection(String),

    /// Any other transport failure.
    Other(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Timeout => write!(f, "request timed out"),
            SessionError::Connection(msg) => write!(f, "connection failed: {msg}"),
            SessionError::Other(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// A reusable, possibly externally owned, network client.
///
/// Uses native `impl Future` in traits (RPITIT) — no `async-trait` macro.
pub trait Session: Send + Sync {
    /// Issue one HTTP request and return the raw response.
    fn send(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<RawResponse, SessionError>> + Send;
}

/// The production [`Session`], backed by [`reqwest::Client`].
///
/// `reqwest::Client` pools connections internally and is cheap to clone, so
/// one `ReqwestSession` serves any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct ReqwestSession {
    client: reqwest::Client,
}

impl ReqwestSession {
    /// Session with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Wrap an externally owned client. The caller keeps control of the
    /// client's lifecycle; this session only rides on its connection pool.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Session for ReqwestSession {
    async fn send(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<RawResponse, SessionError> {
        let mut builder = self.client.request(method, url).headers(options.headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Map a reqwest error to our [`SessionError`].
fn map_reqwest_error(err: reqwest::Error) -> SessionError {
    if err.is_timeout() {
        SessionError::Timeout
    } else if err.is_connect() {
        SessionError::Connection(err.to_string())
    } else {
        SessionError::Other(err.to_string())
    }
}
