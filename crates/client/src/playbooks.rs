//! Read-only playbook listing.

use std::sync::Arc;

use wfqueue_core::Playbook;

use crate::envelope::decode;
use crate::error::QueueApiError;
use crate::transport::{ApiRequest, Transport};

const PLAYBOOKS_PATH: &str = "/playbooks";

/// Lists the playbooks (and their workflows) available for queuing.
pub struct PlaybookCatalog<T> {
    transport: Arc<T>,
}

impl<T> Clone for PlaybookCatalog<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> PlaybookCatalog<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// All playbooks in one unpaginated request.
    pub async fn list_playbooks(&self) -> Result<Vec<Playbook>, QueueApiError> {
        let body = self.transport.send(ApiRequest::get(PLAYBOOKS_PATH)).await?;
        let playbooks: Vec<Playbook> = decode(&body)?;
        tracing::debug!(count = playbooks.len(), "Fetched playbooks");
        Ok(playbooks)
    }
}
