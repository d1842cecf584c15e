//! The request/response seam between the queue components and the wire.
//!
//! Components build an [`ApiRequest`] and hand it to a [`Transport`],
//! which returns the raw body of a successful (2xx) response. Status
//! checking and authentication belong to the transport; envelope
//! unwrapping and decoding belong to [`crate::envelope`].

use std::future::Future;

use crate::error::QueueApiError;

/// HTTP methods used by the queue API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Patch,
}

/// A single request against the API root.
///
/// The path is kept as individual segments so a transport can
/// percent-encode each one; opaque ids may contain `/`, `?` or `#`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    /// Unencoded path segments relative to the API root.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: ApiMethod, path: &str, body: Option<serde_json::Value>) -> Self {
        Self {
            method,
            segments: split_path(path),
            query: Vec::new(),
            body,
        }
    }

    /// `path` is a fixed route such as `/workflowqueue`; ids are added
    /// with [`with_segment`](Self::with_segment).
    pub fn get(path: &str) -> Self {
        Self::new(ApiMethod::Get, path, None)
    }

    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Self::new(ApiMethod::Post, path, Some(body))
    }

    pub fn patch(path: &str, body: serde_json::Value) -> Self {
        Self::new(ApiMethod::Patch, path, Some(body))
    }

    /// Append one path segment, taken verbatim.
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Unencoded `/`-joined path, for logging and assertions.
    pub fn path(&self) -> String {
        self.segments
            .iter()
            .fold(String::new(), |path, segment| path + "/" + segment)
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Value of the first query parameter named `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sends requests to the queue API.
///
/// Implementations must map non-2xx responses to
/// [`QueueApiError::Api`] and return the body of successful responses
/// untouched. Independent requests may be in flight concurrently.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<String, QueueApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_has_no_body() {
        let req = ApiRequest::get("/playbooks");
        assert_eq!(req.method, ApiMethod::Get);
        assert!(req.body.is_none());
        assert!(req.query.is_empty());
    }

    #[test]
    fn route_is_split_into_segments() {
        let req = ApiRequest::get("/workflowqueue").with_segment("a/b?c");
        assert_eq!(req.segments, vec!["workflowqueue", "a/b?c"]);
        assert_eq!(req.path(), "/workflowqueue/a/b?c");
    }

    #[test]
    fn query_params_are_kept_in_order() {
        let req = ApiRequest::get("/workflowqueue")
            .with_query("page", 2)
            .with_query("page", 3);
        assert_eq!(req.query_param("page"), Some("2"));
        assert_eq!(req.query.len(), 2);
        assert_eq!(req.query_param("limit"), None);
    }

    #[test]
    fn patch_carries_body() {
        let req = ApiRequest::patch("/workflowqueue", serde_json::json!({"status": "pause"}));
        assert_eq!(req.method, ApiMethod::Patch);
        assert_eq!(req.body.unwrap()["status"], "pause");
    }
}
