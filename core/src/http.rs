//! The dispatcher: one `Route` in, one decoded JSON object out.
//!
//! # Design
//! `Http` holds exactly one [`Session`] and nothing else. Every call is a
//! single round trip with no retries, no caching, and no ordering imposed
//! between concurrent calls; concurrency safety is whatever the session
//! provides. Status interpretation happens here, not in the session, so mock
//! sessions in tests stay trivial.

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::route::Route;
use crate::session::{ReqwestSession, RequestOptions, Session};

/// Executes [`Route`]s over a [`Session`] and decodes their responses.
///
/// Construct with [`Http::new`] for a private session, or with
/// [`Http::with_session`] to share one the host application already owns.
/// Either way the same session instance serves every call.
#[derive(Debug, Clone)]
pub struct Http<S = ReqwestSession> {
    session: S,
}

impl Http<ReqwestSession> {
    /// Dispatcher with its own session, created once and reused across
    /// calls. Nothing closes this session; it lives as long as the
    /// dispatcher.
    pub fn new() -> Self {
        Self {
            session: ReqwestSession::new(),
        }
    }
}

impl Default for Http<ReqwestSession> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Session> Http<S> {
    /// Dispatcher over a caller-supplied session. The caller keeps the
    /// session's lifecycle; the dispatcher never tears it down.
    pub fn with_session(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Issue one request and decode the response as a JSON object.
    ///
    /// 200 is the only success status. 4xx maps to [`ApiError::Client`],
    /// 5xx to [`ApiError::Server`], anything else to
    /// [`ApiError::UnexpectedStatus`]. A 200 body that is missing, malformed,
    /// or not a JSON object is [`ApiError::Decode`].
    pub async fn request(
        &self,
        route: &Route,
        options: RequestOptions,
    ) -> Result<Map<String, Value>, ApiError> {
        log::debug!("{} {}", route.method(), route.url());
        let response = self
            .session
            .send(route.method().clone(), route.url(), options)
            .await
            .map_err(ApiError::Transport)?;
        log::trace!("{} {} -> {}", route.method(), route.url(), response.status);

        let status = response.status.as_u16();
        if status != 200 {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            return Err(match status {
                400..=499 => ApiError::Client { status, body },
                500..=599 => ApiError::Server { status, body },
                _ => ApiError::UnexpectedStatus { status, body },
            });
        }

        match serde_json::from_slice::<Value>(&response.body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ApiError::Decode("expected a JSON object".to_string())),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}
