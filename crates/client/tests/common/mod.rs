#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::json;
use wfqueue_client::{ApiRequest, QueueApiError, Transport};

/// In-memory [`Transport`] that replays scripted responses in order and
/// records every request it receives.
///
/// Running out of scripted responses yields a 599 API error so a test
/// that issues one request too many fails loudly.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String, QueueApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response with the given JSON body.
    pub fn respond(self, body: serde_json::Value) -> Self {
        self.push(Ok(body.to_string()))
    }

    /// Queue a successful response with a raw body.
    pub fn respond_raw(self, body: &str) -> Self {
        self.push(Ok(body.to_string()))
    }

    /// Queue a server error.
    pub fn fail(self, status: u16, body: &str) -> Self {
        self.push(Err(QueueApiError::Api {
            status,
            body: body.to_string(),
        }))
    }

    fn push(self, response: Result<String, QueueApiError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The `page` query parameter of each request, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests()
            .iter()
            .filter_map(|r| r.query_param("page").and_then(|p| p.parse().ok()))
            .collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, QueueApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(QueueApiError::Api {
                    status: 599,
                    body: "no scripted response left".to_string(),
                })
            })
    }
}

/// JSON for a list-view execution status.
pub fn status_json(execution_id: &str, status: &str) -> serde_json::Value {
    json!({
        "execution_id": execution_id,
        "workflow_id": "wf-1",
        "name": "collect",
        "status": status,
    })
}

/// JSON for a page of running executions with the given ids.
pub fn page_json(ids: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(ids.iter().map(|id| status_json(id, "running")).collect())
}
