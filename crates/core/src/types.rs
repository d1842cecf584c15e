/// Server-assigned execution identifier. Opaque to the client.
pub type ExecutionId = String;

/// Identifier of a workflow definition inside a playbook.
pub type WorkflowId = String;

/// Identifier of a playbook.
pub type PlaybookId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
