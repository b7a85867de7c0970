use serde::Serialize;

use crate::{
    error::{ErrorKind, EvalError, EvalResult},
    interpreter::trace::Evaluation,
};

/// JSON envelope for handing an evaluation outcome to a client.
///
/// A success serializes the [`Evaluation`] fields next to `"success": true`;
/// a failure serializes as `{"success": false, "kind": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success {
        success:    bool,
        #[serde(flatten)]
        evaluation: Evaluation,
    },
    Failure {
        success: bool,
        kind:    ErrorKind,
        message: String,
    },
}

impl Response {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Serializes the envelope as compact JSON.
    ///
    /// # Example
    /// ```
    /// use stepwise::{evaluate, report::Response};
    ///
    /// let json = Response::from(evaluate("1/0")).to_json().unwrap();
    /// assert!(json.starts_with(r#"{"success":false,"kind":"illegal-arithmetic""#));
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the envelope as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<EvalError> for Response {
    fn from(error: EvalError) -> Self {
        Self::Failure { success: false,
                        kind:    error.kind(),
                        message: error.to_string(), }
    }
}

impl From<EvalResult<Evaluation>> for Response {
    fn from(outcome: EvalResult<Evaluation>) -> Self {
        match outcome {
            Ok(evaluation) => Self::Success { success: true,
                                              evaluation },
            Err(error) => error.into(),
        }
    }
}
