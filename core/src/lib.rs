//! Asynchronous HTTP client core for the Tixte file-hosting API.
//!
//! # Overview
//! Two pieces: [`Route`] describes one pending API call (method, path,
//! query parameters, folded into a URL at construction), and [`Http`]
//! executes it over a [`Session`] and decodes the JSON response.
//!
//! # Design
//! - `Route` is a pure value object; building one never touches the network.
//! - The session is an injected capability: [`Http::new`] builds a private
//!   `reqwest` client, [`Http::with_session`] borrows one the host
//!   application already owns (a Discord bot can lend its own). The
//!   dispatcher never closes a session it did not create.
//! - One round trip per call, no retries, no caching. Non-200 statuses
//!   dispatch into a small error taxonomy by range instead of a catch-all.

pub mod error;
pub mod http;
pub mod route;
pub mod session;

pub use error::ApiError;
pub use http::Http;
pub use route::{Route, BASE};
pub use session::{RawResponse, ReqwestSession, RequestOptions, Session, SessionError};
