// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Engine Errors

use serde::{Deserialize, Serialize};

use crate::types::GameStatus;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by the simulation core.
///
/// None of these mutate the [`EconomicState`](crate::state::EconomicState):
/// validation always happens before the first indicator is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("unrecognized policy choice `{value}`")]
    InvalidPolicyChoice { value: String },

    #[error("operation not permitted while game status is {status:?}")]
    InvalidStateTransition { status: GameStatus },

    #[error("invalid engine configuration: {0}")]
    Configuration(String),
}

/// Machine-readable error category, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidPolicyChoice,
    InvalidStateTransition,
    ConfigurationError,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPolicyChoice { .. } => ErrorKind::InvalidPolicyChoice,
            Self::InvalidStateTransition { .. } => ErrorKind::InvalidStateTransition,
            Self::Configuration(_) => ErrorKind::ConfigurationError,
        }
    }

    /// Flatten into the `{kind, message}` pair handed to the presentation layer.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable error shape for callers outside Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

// ===========================================================================
// Tests
// ===========================================================================
