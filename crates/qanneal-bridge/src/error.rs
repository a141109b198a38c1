//! Error types for the solver bridge.

use thiserror::Error;

/// Errors that can occur when invoking the external solver.
///
/// Every failure on the foreign side of the boundary is caught and folded
/// into one of these categories; the bridge never lets a Python exception
/// propagate outward.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The embedded runtime was not compiled into this build.
    ///
    /// Terminal for the process: no foreign call is ever attempted.
    #[error("embedded solver runtime not available (built without the `python` feature)")]
    RuntimeDisabled,

    /// The foreign side raised during path setup, import, invocation or
    /// coercion. Carries the exception's own message verbatim.
    #[error("solver invocation failed: {0}")]
    InvocationFailed(String),

    /// The foreign call returned something structurally unexpected
    /// (wrong arity, or elements not coercible to `(Vec<u8>, f64)`).
    ///
    /// Handled like [`BridgeError::InvocationFailed`] by callers; kept
    /// distinct for diagnosability.
    #[error("solver returned a malformed result: {0}")]
    MalformedResult(String),
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_disabled_display() {
        let msg = BridgeError::RuntimeDisabled.to_string();
        assert!(msg.contains("python"));
    }

    #[test]
    fn test_invocation_failed_carries_message_verbatim() {
        let err = BridgeError::InvocationFailed("timeout".into());
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_malformed_result_display() {
        let err = BridgeError::MalformedResult("expected a 2-sequence".into());
        assert!(err.to_string().contains("2-sequence"));
    }
}
