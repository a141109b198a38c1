//! QAnneal Adapter for D-Wave Ocean Samplers
//!
//! This crate integrates the solver bridge into the heuristic framework:
//! one parameterized heuristic, [`AnnealHeuristic`], that extracts the
//! term list from a QUBO instance, drives one solver invocation on its
//! configured backend, and reports the resulting solution.
//!
//! The `"qpu"` and `"sa"` backends differ only in the name handed across
//! the solver boundary, so there is a single adapter rather than two —
//! construct it with [`AnnealHeuristic::qpu`] or [`AnnealHeuristic::sa`].
//!
//! # Failure behavior
//!
//! A failed invocation (disabled runtime, foreign exception, malformed or
//! empty result, invalid assignment) is logged with the backend name and
//! produces no report. Nothing propagates upward: a failed backend simply
//! contributes nothing to the surrounding search.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use qanneal_adapter_dwave::AnnealHeuristic;
//! use qanneal_qubo::{BestSolutionSink, QuboInstance};
//!
//! let mut instance = QuboInstance::new(2);
//! instance.set_pair(0, 1, 1.0).unwrap();
//!
//! let heuristic = AnnealHeuristic::sa();
//! let mut sink = BestSolutionSink::new();
//! heuristic.run(&instance, Duration::from_secs(10), true, &mut sink);
//! // Without the `python` feature the runtime is disabled and the sink
//! // stays empty.
//! ```

mod heuristic;

pub use heuristic::AnnealHeuristic;

// Re-export common types for convenience.
pub use qanneal_bridge::{Backend, DwaveBridge, SolverBridge};
