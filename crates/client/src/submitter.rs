//! Workflow submission.

use std::sync::Arc;

use wfqueue_core::WorkflowStatus;

use crate::aggregator::WORKFLOW_QUEUE_PATH;
use crate::envelope::decode;
use crate::error::QueueApiError;
use crate::transport::{ApiRequest, Transport};

/// Queues workflows for execution.
pub struct QueueSubmitter<T> {
    transport: Arc<T>,
}

impl<T> Clone for QueueSubmitter<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> QueueSubmitter<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Queue `workflow_id` and return the new execution's initial status.
    ///
    /// Sends `POST /workflowqueue` with `{"workflow_id": ...}`. Not
    /// idempotent: every call creates a new execution.
    pub async fn enqueue(&self, workflow_id: &str) -> Result<WorkflowStatus, QueueApiError> {
        let body = serde_json::json!({ "workflow_id": workflow_id });

        let response = self
            .transport
            .send(ApiRequest::post(WORKFLOW_QUEUE_PATH, body))
            .await?;
        let status: WorkflowStatus = decode(&response)?;

        tracing::info!(
            workflow_id,
            execution_id = %status.execution_id,
            status = %status.status,
            "Workflow queued",
        );
        Ok(status)
    }
}
