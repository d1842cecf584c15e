//! Lifecycle state enums for executions and the actions inside them.
//!
//! The server reports states as lowercase string tokens. Each enum maps
//! the known tokens to variants and keeps anything else verbatim in an
//! `Other` variant, so a newer server never breaks deserialization.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! define_state_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A token this client does not recognise, kept as sent.
            Other(String),
        }

        impl $name {
            /// Map a wire token to a variant. Unknown tokens become `Other`.
            pub fn from_token(token: &str) -> Self {
                match token {
                    $( $token => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }

            /// The wire token for this state.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $token, )+
                    Self::Other(token) => token.as_str(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                Ok(Self::from_token(&token))
            }
        }
    };
}

define_state_enum! {
    /// Lifecycle state of a whole workflow execution.
    ExecutionState {
        Pending = "pending",
        Running = "running",
        Paused = "paused",
        AwaitingData = "awaiting_data",
        Completed = "completed",
        Aborted = "aborted",
    }
}

define_state_enum! {
    /// State of a single action (step) inside an execution.
    ActionState {
        Executing = "executing",
        AwaitingData = "awaiting_data",
        Success = "success",
        Failure = "failure",
        Aborted = "aborted",
    }
}

impl ExecutionState {
    /// Completed and aborted executions never change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Aborted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
