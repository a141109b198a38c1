//! The parameterized annealing heuristic.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use qanneal_bridge::{Backend, DwaveBridge, SolverBridge};
use qanneal_qubo::{QuboInstance, QuboSolution, ReportSink, extract_terms};

/// Heuristic that delegates one QUBO solve to an external sampler.
///
/// Generic over the bridge so tests can substitute doubles; production
/// code uses the default [`DwaveBridge`].
#[derive(Debug, Clone)]
pub struct AnnealHeuristic<B = DwaveBridge> {
    backend: Backend,
    config_path: Option<PathBuf>,
    bridge: B,
}

impl AnnealHeuristic<DwaveBridge> {
    /// Heuristic targeting the quantum-annealing hardware backend.
    pub fn qpu() -> Self {
        Self::new(Backend::Qpu)
    }

    /// Heuristic targeting the classical simulated-annealing backend.
    pub fn sa() -> Self {
        Self::new(Backend::Sa)
    }

    /// Heuristic for an explicit backend, using the production bridge.
    pub fn new(backend: Backend) -> Self {
        Self::with_bridge(backend, DwaveBridge::new())
    }
}

impl<B: SolverBridge> AnnealHeuristic<B> {
    /// Heuristic with a caller-supplied bridge implementation.
    pub fn with_bridge(backend: Backend, bridge: B) -> Self {
        Self {
            backend,
            config_path: None,
            bridge,
        }
    }

    /// Forward a solver config file to the external sampler.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// The backend this heuristic targets.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Run one solve and report the solution, if any.
    ///
    /// Exactly one invocation attempt is made; there is no retry. The
    /// runtime limit is advisory — the external sampler governs its own
    /// budget — and the call blocks until the sampler returns. On any
    /// failure a diagnostic is emitted and the sink is left untouched.
    pub fn run(
        &self,
        instance: &QuboInstance,
        runtime_limit: Duration,
        validate: bool,
        sink: &mut dyn ReportSink,
    ) {
        let terms = extract_terms(instance);
        debug!(
            backend = %self.backend,
            size = instance.size(),
            terms = terms.len(),
            runtime_limit_s = runtime_limit.as_secs_f64(),
            "dispatching QUBO to external sampler"
        );

        let result = match self
            .bridge
            .invoke(&terms, self.backend, self.config_path.as_deref())
        {
            Ok(result) => result,
            Err(err) => {
                warn!(backend = %self.backend, error = %err, "solver invocation failed, no solution reported");
                return;
            }
        };

        // An empty assignment is the sentinel for "no usable result" and
        // never reaches solution construction.
        if result.is_empty() || result.assignment.len() != instance.size() as usize {
            warn!(
                backend = %self.backend,
                got = result.assignment.len(),
                expected = instance.size(),
                "solver returned no usable assignment"
            );
            return;
        }

        match QuboSolution::new(instance, result.assignment, result.objective, validate) {
            Ok(solution) => {
                debug!(backend = %self.backend, objective = solution.objective(), "reporting solution");
                sink.report(&solution);
            }
            Err(err) => {
                warn!(backend = %self.backend, error = %err, "solver assignment rejected");
            }
        }
    }
}
