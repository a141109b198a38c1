//! The solver bridge seam.
//!
//! [`SolverBridge`] is the trait adapters program against; [`DwaveBridge`]
//! is the production implementation backed by the embedded Python runtime
//! (or a permanently-disabled stub when built without the `python`
//! feature). Tests substitute their own implementations.

use std::path::Path;

use qanneal_qubo::QuadraticTerm;

use crate::backend::Backend;
use crate::error::BridgeResult;
use crate::result::SolverResult;

/// One synchronous call into an external QUBO solver.
pub trait SolverBridge {
    /// Solve the given term list on the selected backend.
    ///
    /// `config_path`, when present, is forwarded opaquely to the external
    /// solver; `None` tells it to use its own defaults, which is distinct
    /// from passing an empty path. The call may block for the solver's
    /// full runtime.
    fn invoke(
        &self,
        terms: &[QuadraticTerm],
        backend: Backend,
        config_path: Option<&Path>,
    ) -> BridgeResult<SolverResult>;
}

/// Bridge to the D-Wave Ocean samplers in the embedded Python runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct DwaveBridge;

impl DwaveBridge {
    /// Create a bridge handle. Cheap; the runtime itself is initialized
    /// lazily on the first invocation.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "python")]
impl SolverBridge for DwaveBridge {
    fn invoke(
        &self,
        terms: &[QuadraticTerm],
        backend: Backend,
        config_path: Option<&Path>,
    ) -> BridgeResult<SolverResult> {
        crate::runtime::invoke(terms, backend, config_path)
    }
}

#[cfg(not(feature = "python"))]
impl SolverBridge for DwaveBridge {
    fn invoke(
        &self,
        _terms: &[QuadraticTerm],
        _backend: Backend,
        _config_path: Option<&Path>,
    ) -> BridgeResult<SolverResult> {
        Err(crate::error::BridgeError::RuntimeDisabled)
    }
}
