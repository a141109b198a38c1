//! QAnneal Solver Bridge
//!
//! This crate owns the boundary between the QUBO heuristic workspace and
//! the external D-Wave Ocean samplers, which live in an embedded Python
//! runtime. Everything that crosses that boundary crosses it here:
//! interpreter lifecycle, argument marshaling, result coercion, and the
//! translation of foreign exceptions into typed local errors.
//!
//! # Overview
//!
//! The bridge exposes one synchronous operation, [`SolverBridge::invoke`]:
//! hand it a flat term list, a [`Backend`] selector and an optional config
//! path, and it returns either a [`SolverResult`] or a [`BridgeError`].
//! No Python exception type ever escapes this crate's public contract.
//!
//! The embedded runtime is a process-wide singleton: it is initialized
//! lazily on the first invocation (one winner, everyone else reuses it)
//! and lives until process teardown. Every invocation holds a process-wide
//! critical section for its full duration — concurrent invocations queue,
//! they never interleave inside the interpreter.
//!
//! # Build-time capability switch
//!
//! The embedded runtime is gated behind the `python` cargo feature. With
//! the feature disabled no Python library is linked at all and
//! [`DwaveBridge`] reports [`BridgeError::RuntimeDisabled`] for every
//! invocation. Callers treat that as "no solution available", never as a
//! fatal condition.
//!
//! # Example
//!
//! ```rust
//! use qanneal_bridge::{Backend, BridgeError, DwaveBridge, SolverBridge};
//! use qanneal_qubo::{QuboInstance, extract_terms};
//!
//! let mut instance = QuboInstance::new(2);
//! instance.set_pair(0, 1, 1.0).unwrap();
//! let terms = extract_terms(&instance);
//!
//! let bridge = DwaveBridge::new();
//! match bridge.invoke(&terms, Backend::Sa, None) {
//!     Ok(result) => println!("objective: {}", result.objective),
//!     Err(BridgeError::RuntimeDisabled) => println!("built without `python`"),
//!     Err(err) => println!("solver failed: {err}"),
//! }
//! ```

pub mod backend;
pub mod bridge;
pub mod error;
pub mod result;

#[cfg(feature = "python")]
mod runtime;

pub use backend::{Backend, UnknownBackend};
pub use bridge::{DwaveBridge, SolverBridge};
pub use error::{BridgeError, BridgeResult};
pub use result::SolverResult;
