//! One handle bundling every queue operation over a shared transport.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wfqueue_core::{PageNumber, Playbook, StatusAction, WorkflowStatus};

use crate::aggregator::StatusAggregator;
use crate::config::ClientConfig;
use crate::error::QueueApiError;
use crate::http::HttpTransport;
use crate::playbooks::PlaybookCatalog;
use crate::poll::{poll_until_terminal, PollConfig};
use crate::submitter::QueueSubmitter;
use crate::transport::Transport;

/// Façade over the queue submitter, status aggregator, and playbook
/// catalog. Cheap to clone.
pub struct QueueClient<T> {
    submitter: QueueSubmitter<T>,
    statuses: StatusAggregator<T>,
    playbooks: PlaybookCatalog<T>,
    poll: PollConfig,
}

impl<T> Clone for QueueClient<T> {
    fn clone(&self) -> Self {
        Self {
            submitter: self.submitter.clone(),
            statuses: self.statuses.clone(),
            playbooks: self.playbooks.clone(),
            poll: self.poll.clone(),
        }
    }
}

impl QueueClient<HttpTransport> {
    /// Build an HTTP-backed client from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, QueueApiError> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(transport).with_poll_config(config.poll.clone()))
    }
}

impl<T: Transport> QueueClient<T> {
    pub fn new(transport: T) -> Self {
        let transport = Arc::new(transport);
        Self {
            submitter: QueueSubmitter::new(Arc::clone(&transport)),
            statuses: StatusAggregator::new(Arc::clone(&transport)),
            playbooks: PlaybookCatalog::new(transport),
            poll: PollConfig::default(),
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn submitter(&self) -> &QueueSubmitter<T> {
        &self.submitter
    }

    pub fn statuses(&self) -> &StatusAggregator<T> {
        &self.statuses
    }

    pub fn playbooks(&self) -> &PlaybookCatalog<T> {
        &self.playbooks
    }

    pub async fn enqueue(&self, workflow_id: &str) -> Result<WorkflowStatus, QueueApiError> {
        self.submitter.enqueue(workflow_id).await
    }

    pub async fn get_status(&self, execution_id: &str) -> Result<WorkflowStatus, QueueApiError> {
        self.statuses.get_status(execution_id).await
    }

    pub async fn get_status_page(
        &self,
        page: PageNumber,
    ) -> Result<Vec<WorkflowStatus>, QueueApiError> {
        self.statuses.get_status_page(page).await
    }

    pub async fn get_all_statuses(&self) -> Result<Vec<WorkflowStatus>, QueueApiError> {
        self.statuses.get_all_statuses().await
    }

    pub async fn perform_action(
        &self,
        execution_id: &str,
        action: &StatusAction,
    ) -> Result<(), QueueApiError> {
        self.statuses.perform_action(execution_id, action).await
    }

    pub async fn list_playbooks(&self) -> Result<Vec<Playbook>, QueueApiError> {
        self.playbooks.list_playbooks().await
    }

    /// Re-poll an execution with this client's backoff until it finishes.
    /// See [`poll_until_terminal`].
    pub async fn wait_for_terminal(
        &self,
        execution_id: &str,
        cancel: &CancellationToken,
    ) -> Option<Result<WorkflowStatus, QueueApiError>> {
        poll_until_terminal(&self.statuses, execution_id, &self.poll, cancel).await
    }
}
