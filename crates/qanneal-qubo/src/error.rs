//! Error types for the QUBO model crate.

use thiserror::Error;

/// Errors that can occur in QUBO model operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuboError {
    /// Variable index outside the instance.
    #[error("variable index {index} out of range for instance of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Size of the instance.
        size: u32,
    },

    /// A pairwise weight was given with both endpoints equal.
    #[error("pair weight requires two distinct variables, got ({index}, {index})")]
    DiagonalPair {
        /// The repeated index.
        index: u32,
    },

    /// Assignment length does not match the instance size.
    #[error("assignment has {got} entries, instance has {expected} variables")]
    AssignmentLength {
        /// Number of variables in the instance.
        expected: u32,
        /// Number of entries in the assignment.
        got: usize,
    },

    /// Assignment contains a value other than 0 or 1.
    #[error("assignment entry {index} is {value}, expected 0 or 1")]
    NotBinary {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: u8,
    },

    /// Recomputed objective disagrees with the claimed one.
    #[error("claimed objective {claimed} disagrees with recomputed objective {computed}")]
    ObjectiveMismatch {
        /// Objective value reported by the solver.
        claimed: f64,
        /// Objective value recomputed against the instance.
        computed: f64,
    },
}

/// Result type for QUBO model operations.
pub type QuboResult<T> = Result<T, QuboError>;
