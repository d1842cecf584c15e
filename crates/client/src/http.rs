//! reqwest-backed [`Transport`] for the workflow-queue REST API.

use crate::config::ClientConfig;
use crate::error::QueueApiError;
use crate::transport::{ApiMethod, ApiRequest, Transport};

/// HTTP transport for a single queue API root.
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: reqwest::Url,
    api_token: Option<String>,
}

impl HttpTransport {
    /// Create a transport for `api_url`, e.g. `http://host:5000/api`.
    ///
    /// Fails with [`QueueApiError::InvalidUrl`] if `api_url` is not an
    /// absolute http(s) URL.
    pub fn new(api_url: &str) -> Result<Self, QueueApiError> {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a transport reusing an existing [`reqwest::Client`]
    /// (useful for sharing a connection pool).
    pub fn with_client(client: reqwest::Client, api_url: &str) -> Result<Self, QueueApiError> {
        let parsed = reqwest::Url::parse(api_url.trim_end_matches('/'))
            .map_err(|e| QueueApiError::InvalidUrl(format!("{api_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(QueueApiError::InvalidUrl(format!(
                "{api_url}: scheme must be http or https"
            )));
        }

        Ok(Self {
            client,
            api_url: parsed,
            api_token: None,
        })
    }

    /// Build a transport from loaded configuration (URL, token, timeout).
    pub fn from_config(config: &ClientConfig) -> Result<Self, QueueApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let transport = Self::with_client(client, &config.api_url)?;
        Ok(match &config.api_token {
            Some(token) => transport.with_token(token.clone()),
            None => transport,
        })
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// The API root all request paths are appended to.
    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// Append `segments` to the API root, percent-encoding each one so
    /// `/`, `?` and `#` inside an id stay part of that segment.
    fn url_for(&self, segments: &[String]) -> Result<reqwest::Url, QueueApiError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| QueueApiError::InvalidUrl(format!("{}: cannot be a base", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Ensure the response has a success status code, returning the body
    /// text on success or a [`QueueApiError::Api`] carrying the status and
    /// body on failure.
    async fn read_body(response: reqwest::Response) -> Result<String, QueueApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(QueueApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, QueueApiError> {
        let url = self.url_for(&request.segments)?;
        tracing::debug!(method = ?request.method, url = %url, "Sending queue API request");

        let mut builder = match request.method {
            ApiMethod::Get => self.client.get(url),
            ApiMethod::Post => self.client.post(url),
            ApiMethod::Patch => self.client.patch(url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        Self::read_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let transport = HttpTransport::new("http://localhost:5000/api/").unwrap();
        assert_eq!(transport.api_url(), "http://localhost:5000/api");
        assert_eq!(
            transport.url_for(&["workflowqueue".to_string()]).unwrap().as_str(),
            "http://localhost:5000/api/workflowqueue"
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        let transport = HttpTransport::new("http://localhost:5000/api").unwrap();
        let url = transport
            .url_for(&["workflowqueue".to_string(), "a/b?c#d".to_string()])
            .unwrap();
        assert_eq!(url.path(), "/api/workflowqueue/a%2Fb%3Fc%23d");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn bare_host_root_gets_no_empty_segment() {
        let transport = HttpTransport::new("http://localhost:5000").unwrap();
        let url = transport.url_for(&["playbooks".to_string()]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/playbooks");
    }

    #[test]
    fn relative_url_is_rejected() {
        let result = HttpTransport::new("localhost/api");
        assert!(matches!(result, Err(QueueApiError::InvalidUrl(_))));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = HttpTransport::new("ftp://localhost/api");
        assert!(matches!(result, Err(QueueApiError::InvalidUrl(_))));
    }
}
