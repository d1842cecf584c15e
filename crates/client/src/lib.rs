//! Client for a remote workflow-execution queue.
//!
//! Submits workflows, reads execution status (one execution, one page,
//! or every page aggregated in order), sends pause/resume/abort actions,
//! and lists playbooks. All I/O goes through the [`Transport`] seam;
//! [`HttpTransport`] is the reqwest-backed implementation.

pub mod aggregator;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod playbooks;
pub mod poll;
pub mod submitter;
pub mod transport;

pub use aggregator::StatusAggregator;
pub use client::QueueClient;
pub use config::{ClientConfig, ConfigError};
pub use error::QueueApiError;
pub use http::HttpTransport;
pub use playbooks::PlaybookCatalog;
pub use poll::{poll_until_terminal, PollConfig};
pub use submitter::QueueSubmitter;
pub use transport::{ApiMethod, ApiRequest, Transport};
