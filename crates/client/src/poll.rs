//! Exponential-backoff re-polling of a single execution.
//!
//! The queue API has no push channel, so callers that want to wait for
//! an execution to finish re-read it with [`poll_until_terminal`] until
//! it reaches a terminal state or the [`CancellationToken`] fires.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wfqueue_core::WorkflowStatus;

use crate::aggregator::StatusAggregator;
use crate::error::QueueApiError;
use crate::transport::Transport;

/// Tunable parameters for the polling backoff.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay before the second poll.
    pub initial_delay: Duration,
    /// Upper bound on the delay between polls.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each non-terminal poll.
    pub multiplier: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
        }
    }
}

/// Calculate the next backoff delay from the current delay and config.
///
/// The result is clamped to [`PollConfig::max_delay`].
pub fn next_delay(current: Duration, config: &PollConfig) -> Duration {
    let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
    Duration::from_millis(next_ms).min(config.max_delay)
}

/// Re-poll `execution_id` until it is completed or aborted.
///
/// Returns `Some(Ok(status))` with the first terminal snapshot,
/// `Some(Err(e))` as soon as a poll fails (there is no retry), or
/// `None` if `cancel` fires first.
pub async fn poll_until_terminal<T: Transport>(
    aggregator: &StatusAggregator<T>,
    execution_id: &str,
    config: &PollConfig,
    cancel: &CancellationToken,
) -> Option<Result<WorkflowStatus, QueueApiError>> {
    let mut delay = config.initial_delay;
    let mut attempt = 0u32;

    loop {
        attempt += 1;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(execution_id, attempt, "Polling cancelled");
                return None;
            }
            result = aggregator.get_status(execution_id) => {
                match result {
                    Ok(status) if status.status.is_terminal() => {
                        tracing::info!(
                            execution_id,
                            attempt,
                            status = %status.status,
                            "Execution reached terminal state",
                        );
                        return Some(Ok(status));
                    }
                    Ok(status) => {
                        tracing::debug!(
                            execution_id,
                            attempt,
                            status = %status.status,
                            delay_ms = delay.as_millis() as u64,
                            "Execution still in progress",
                        );
                    }
                    Err(e) => {
                        tracing::warn!(execution_id, attempt, error = %e, "Status poll failed");
                        return Some(Err(e));
                    }
                }
            }
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return None,
            _ = tokio::time::sleep(delay) => {}
        }

        delay = next_delay(delay, config);
    }
}
