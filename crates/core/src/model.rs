//! Wire records returned by the workflow-queue API.
//!
//! These are point-in-time snapshots. The server owns the real state and
//! may have moved on by the time a value is inspected.

use serde::{Deserialize, Serialize};

use crate::status::{ActionState, ExecutionState};
use crate::types::{ExecutionId, PlaybookId, Timestamp, WorkflowId};

/// One execution instance of a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatus {
    pub execution_id: ExecutionId,
    #[serde(default)]
    pub workflow_id: Option<WorkflowId>,
    #[serde(default)]
    pub name: Option<String>,
    pub status: ExecutionState,
    #[serde(default)]
    pub started_at: Option<Timestamp>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    /// User that queued the execution, when the server reports it.
    #[serde(default)]
    pub user: Option<String>,
    /// Per-step records. Only populated on detail responses.
    #[serde(default)]
    pub action_statuses: Vec<ActionStatus>,
}

/// Status of a single action executed within a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStatus {
    pub execution_id: ExecutionId,
    pub action_id: String,
    pub name: String,
    pub app_name: String,
    pub action_name: String,
    pub status: ActionState,
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub started_at: Option<Timestamp>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

/// A workflow entry inside a playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub id: WorkflowId,
    pub name: String,
}

/// A named collection of workflow definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playbook {
    pub id: PlaybookId,
    pub name: String,
    #[serde(default)]
    pub workflows: Vec<WorkflowSummary>,
}

impl Playbook {
    /// Look up a workflow in this playbook by name.
    pub fn workflow_named(&self, name: &str) -> Option<&WorkflowSummary> {
        self.workflows.iter().find(|w| w.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_entry_without_actions() {
        let json = r#"{
            "execution_id": "e-1",
            "workflow_id": "w-1",
            "name": "scan hosts",
            "status": "running",
            "started_at": "2026-03-01T12:00:00Z"
        }"#;
        let status: WorkflowStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.execution_id, "e-1");
        assert_eq!(status.status, ExecutionState::Running);
        assert!(status.started_at.is_some());
        assert!(status.completed_at.is_none());
        assert!(status.action_statuses.is_empty());
    }

    #[test]
    fn parse_detail_with_action_statuses() {
        let json = r#"{
            "execution_id": "e-2",
            "status": "completed",
            "action_statuses": [{
                "execution_id": "a-exec-1",
                "action_id": "a-1",
                "name": "ping",
                "app_name": "Utilities",
                "action_name": "echo",
                "status": "success",
                "result": {"output": "pong"}
            }]
        }"#;
        let status: WorkflowStatus = serde_json::from_str(json).unwrap();
        assert!(status.status.is_terminal());
        assert_eq!(status.action_statuses.len(), 1);

        let action = &status.action_statuses[0];
        assert_eq!(action.status, ActionState::Success);
        assert_eq!(action.result.as_ref().unwrap()["output"], "pong");
    }

    #[test]
    fn missing_execution_id_is_rejected() {
        let json = r#"{"status": "running"}"#;
        assert!(serde_json::from_str::<WorkflowStatus>(json).is_err());
    }

    #[test]
    fn playbook_workflow_lookup() {
        let json = r#"{
            "id": "p-1",
            "name": "triage",
            "workflows": [{"id": "w-1", "name": "collect"}, {"id": "w-2", "name": "report"}]
        }"#;
        let playbook: Playbook = serde_json::from_str(json).unwrap();
        assert_eq!(playbook.workflow_named("report").map(|w| w.id.as_str()), Some("w-2"));
        assert!(playbook.workflow_named("missing").is_none());
    }
}
