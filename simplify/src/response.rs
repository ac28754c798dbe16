//! JSON response envelopes.
//!
//! Callers that expose the pipeline over a request/response transport get
//! `{"success": true, ...stages}` on success and
//! `{"success": false, "error": ..., "kind": ...}` on failure.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimplifyError};
use crate::pipeline::SimplifyResult;

/// Outcome of a simplification request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SimplifyResponse {
    /// The pipeline ran.
    Success {
        /// Always `true`.
        success: bool,

        #[serde(flatten)]
        result: SimplifyResult,
    },
    /// The pipeline rejected the request.
    Failure {
        /// Always `false`.
        success: bool,

        /// Human-readable message.
        error: String,

        /// Machine-readable error tag.
        kind: String,
    },
}

impl SimplifyResponse {
    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Serialise to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "error": e.to_string(), "kind": "serialization" })
        })
    }
}

impl From<SimplifyResult> for SimplifyResponse {
    fn from(result: SimplifyResult) -> Self {
        Self::Success {
            success: true,
            result,
        }
    }
}

impl From<SimplifyError> for SimplifyResponse {
    fn from(error: SimplifyError) -> Self {
        Self::Failure {
            success: false,
            kind: error.kind().to_string(),
            error: error.to_string(),
        }
    }
}

impl From<Result<SimplifyResult>> for SimplifyResponse {
    fn from(result: Result<SimplifyResult>) -> Self {
        match result {
            Ok(result) => result.into(),
            Err(error) => error.into(),
        }
    }
}
