//! QAnneal QUBO Problem Model
//!
//! This crate provides the core data structures for representing Quadratic
//! Unconstrained Binary Optimization (QUBO) problems in QAnneal. It forms
//! the foundation shared by the solver bridge and the backend adapters.
//!
//! # Overview
//!
//! A QUBO instance over `n` binary variables is a sparse quadratic form:
//! a vector of linear weights plus a set of pairwise weights, each
//! unordered pair stored exactly once. The objective follows the
//! maximisation convention
//!
//! ```text
//!     maximise  sum_i lin[i]·x_i  +  2·sum_{i<j} w_ij·x_i·x_j
//! ```
//!
//! # Core Components
//!
//! - **Instance**: [`QuboInstance`] — sparse quadratic form with
//!   bounds-checked mutators
//! - **Terms**: [`QuadraticTerm`] and [`extract_terms`] — the canonical
//!   flat encoding handed across the solver boundary
//! - **Solution**: [`QuboSolution`] — a validated 0/1 assignment with its
//!   objective value
//! - **Reporting**: [`ReportSink`] — the callback seam into the
//!   surrounding heuristic framework
//!
//! # Example
//!
//! ```rust
//! use qanneal_qubo::{QuboInstance, extract_terms};
//!
//! let mut instance = QuboInstance::new(3);
//! instance.set_linear(0, 1.0).unwrap();
//! instance.set_linear(2, -2.0).unwrap();
//! instance.set_pair(0, 2, 3.5).unwrap();
//!
//! let terms = extract_terms(&instance);
//! assert_eq!(terms.len(), 3);
//! assert_eq!(instance.objective(&[1, 0, 1]), 1.0 - 2.0 + 2.0 * 3.5);
//! ```

pub mod error;
pub mod instance;
pub mod report;
pub mod solution;
pub mod terms;

pub use error::{QuboError, QuboResult};
pub use instance::QuboInstance;
pub use report::{BestSolutionSink, ReportSink};
pub use solution::QuboSolution;
pub use terms::{QuadraticTerm, extract_terms};
