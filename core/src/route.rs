//! Request descriptor for Tixte API calls.
//!
//! # Design
//! A `Route` pins down one pending API call: method, relative path, and any
//! query parameters, folded into a fully-qualified URL at construction time.
//! The URL is computed once and never mutated afterwards, so a `Route` can
//! be cloned or handed to the dispatcher without surprises.

use http::Method;
use url::form_urlencoded;

/// Root of the Tixte REST API. Routes built with [`Route::new`] or
/// [`Route::with_params`] resolve against this address.
pub const BASE: &str = "https://api.tixte.com/v1";

/// One pending API call: method, target, query parameters.
///
/// Query parameters are serialized in standard form (`?a=1&b=2`,
/// percent-encoded). Construction never fails and performs no I/O; the verb
/// and path are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    path: String,
    parameters: Vec<(String, String)>,
    url: String,
}

impl Route {
    /// Route against [`BASE`] with no query parameters.
    pub fn new(method: Method, path: &str) -> Self {
        Self::with_base(BASE, method, path, &[])
    }

    /// Route against [`BASE`] with query parameters.
    pub fn with_params(method: Method, path: &str, parameters: &[(&str, &str)]) -> Self {
        Self::with_base(BASE, method, path, parameters)
    }

    /// Route against an explicit base address. Tests point this at a local
    /// mock server. A trailing `/` on the base is stripped so paths always
    /// supply their own leading `/`.
    pub fn with_base(base: &str, method: Method, path: &str, parameters: &[(&str, &str)]) -> Self {
        let mut url = format!("{}{path}", base.trim_end_matches('/'));
        if !parameters.is_empty() {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(parameters)
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        Self {
            method,
            path: path.to_string(),
            parameters: parameters
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            url,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The fully-qualified request target, fixed at construction.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The query parameters as originally supplied.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }
}
