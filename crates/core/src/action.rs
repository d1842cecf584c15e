//! Status-change tokens sent to a running execution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A state-transition request token (`pause`, `resume`, `abort`, ...).
///
/// The set is open-ended: any string the server understands can be
/// sent, and the client never checks membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusAction(String);

impl StatusAction {
    pub const PAUSE: &'static str = "pause";
    pub const RESUME: &'static str = "resume";
    pub const ABORT: &'static str = "abort";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn pause() -> Self {
        Self::new(Self::PAUSE)
    }

    pub fn resume() -> Self {
        Self::new(Self::RESUME)
    }

    pub fn abort() -> Self {
        Self::new(Self::ABORT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatusAction {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for StatusAction {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_value(StatusAction::abort()).unwrap();
        assert_eq!(json, serde_json::json!("abort"));
    }

    #[test]
    fn arbitrary_tokens_pass_through() {
        let action = StatusAction::from("rewind");
        assert_eq!(action.as_str(), "rewind");
        assert_eq!(action.to_string(), "rewind");
    }
}
