//! Error taxonomy for the Tixte client.
//!
//! # Design
//! The upstream contract is "200 with a JSON object body"; everything else
//! is an error. 4xx and 5xx statuses get separate variants because callers
//! treat "you asked for something wrong" and "the service is unhealthy"
//! differently. Statuses outside both ranges that still aren't 200 land in
//! `UnexpectedStatus` with the raw body for debugging.

use std::fmt;

use crate::session::SessionError;

/// Errors returned by [`Http::request`](crate::Http::request).
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a 4xx status.
    Client { status: u16, body: String },

    /// The server returned a 5xx status.
    Server { status: u16, body: String },

    /// The server returned a status that is neither 200 nor 4xx/5xx.
    UnexpectedStatus { status: u16, body: String },

    /// The response body was not a JSON object.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The request never produced an HTTP response.
    Transport(SessionError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Client { status, body } => {
                write!(f, "client error {status}: {body}")
            }
            ApiError::Server { status, body } => {
                write!(f, "server error {status}: {body}")
            }
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            ApiError::Decode(msg) => write!(f, "response decode failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "request serialization failed: {msg}"),
            ApiError::Transport(err) => write!(f, "transport failed: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
