//! Domain types shared by the workflow-queue client and CLI.
//!
//! Everything here is a read-only snapshot of server-owned state:
//! execution statuses, playbooks, and the small value types used to
//! address them (ids, page numbers, action tokens).

pub mod action;
pub mod error;
pub mod model;
pub mod page;
pub mod status;
pub mod types;

pub use action::StatusAction;
pub use error::CoreError;
pub use model::{ActionStatus, Playbook, WorkflowStatus, WorkflowSummary};
pub use page::PageNumber;
pub use status::{ActionState, ExecutionState};
