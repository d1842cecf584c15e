//! Execution-status queries and status-change actions.
//!
//! The interesting part is [`StatusAggregator::get_all_statuses`]: it
//! turns the page-bounded `GET /workflowqueue?page=n` listing into one
//! ordered collection by fetching pages strictly one after another until
//! the server returns an empty page.

use std::sync::Arc;

use futures::Stream;
use wfqueue_core::{PageNumber, StatusAction, WorkflowStatus};

use crate::envelope::decode;
use crate::error::QueueApiError;
use crate::transport::{ApiRequest, Transport};

pub(crate) const WORKFLOW_QUEUE_PATH: &str = "/workflowqueue";

/// Reads execution status and requests state transitions.
///
/// Stateless: every call goes to the server, nothing is cached.
pub struct StatusAggregator<T> {
    transport: Arc<T>,
}

impl<T> Clone for StatusAggregator<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> StatusAggregator<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Full detail for one execution, including its action statuses.
    pub async fn get_status(&self, execution_id: &str) -> Result<WorkflowStatus, QueueApiError> {
        tracing::debug!(execution_id, "Fetching execution status");
        let body = self
            .transport
            .send(ApiRequest::get(WORKFLOW_QUEUE_PATH).with_segment(execution_id))
            .await?;
        decode(&body)
    }

    /// One page of the execution-status collection.
    ///
    /// An empty vector means `page` is past the end.
    pub async fn get_status_page(
        &self,
        page: PageNumber,
    ) -> Result<Vec<WorkflowStatus>, QueueApiError> {
        let body = self
            .transport
            .send(ApiRequest::get(WORKFLOW_QUEUE_PATH).with_query("page", page))
            .await?;
        let statuses: Vec<WorkflowStatus> = decode(&body)?;
        tracing::debug!(page = page.get(), count = statuses.len(), "Fetched status page");
        Ok(statuses)
    }

    /// Every execution status, in page order.
    ///
    /// Pages are fetched one at a time starting at 1; page `n + 1` is
    /// requested only after page `n` came back non-empty. The first
    /// empty page ends the walk. If any page fails the whole call fails
    /// with that page's error and the pages read so far are dropped.
    pub async fn get_all_statuses(&self) -> Result<Vec<WorkflowStatus>, QueueApiError> {
        let mut all = Vec::new();
        let mut pages = 0u32;
        let mut next = Some(PageNumber::FIRST);

        while let Some(page) = next {
            let statuses = self.get_status_page(page).await?;
            if statuses.is_empty() {
                break;
            }
            all.extend(statuses);
            pages += 1;
            next = page.next();
        }

        tracing::info!(
            pages,
            count = all.len(),
            "Aggregated execution statuses",
        );
        Ok(all)
    }

    /// Lazily walk the status pages with the same ordering as
    /// [`get_all_statuses`](Self::get_all_statuses).
    ///
    /// The next page is not requested until the previous item has been
    /// consumed. The stream ends before the first empty page, or right
    /// after yielding an error.
    pub fn status_pages(
        &self,
    ) -> impl Stream<Item = Result<Vec<WorkflowStatus>, QueueApiError>> + '_ {
        self.status_pages_from(PageNumber::FIRST)
    }

    /// Like [`status_pages`](Self::status_pages), starting at `start`.
    ///
    /// The walk also ends after `u32::MAX`, the last addressable page.
    pub fn status_pages_from(
        &self,
        start: PageNumber,
    ) -> impl Stream<Item = Result<Vec<WorkflowStatus>, QueueApiError>> + '_ {
        futures::stream::unfold(Some(start), move |next| async move {
            let page = next?;
            match self.get_status_page(page).await {
                Ok(statuses) if statuses.is_empty() => None,
                Ok(statuses) => Some((Ok(statuses), page.next())),
                Err(e) => Some((Err(e), None)),
            }
        })
    }

    /// Ask the server to move an execution to a new state.
    ///
    /// Sends `PATCH /workflowqueue` with `{execution_id, status}`. The
    /// token is passed through unchecked and the response body is
    /// ignored; re-poll with [`get_status`](Self::get_status) to see the
    /// effect.
    pub async fn perform_action(
        &self,
        execution_id: &str,
        action: &StatusAction,
    ) -> Result<(), QueueApiError> {
        let body = serde_json::json!({
            "execution_id": execution_id,
            "status": action,
        });

        self.transport
            .send(ApiRequest::patch(WORKFLOW_QUEUE_PATH, body))
            .await?;

        tracing::info!(execution_id, action = %action, "Requested execution status change");
        Ok(())
    }
}
