//! Flat term encoding of a QUBO instance.
//!
//! The solver boundary speaks in `(row, col, weight)` triples: diagonal
//! entries carry the linear weights, off-diagonal entries carry each
//! unordered pairwise weight exactly once. Exact-zero weights are never
//! materialized, keeping the encoding strictly sparse.

use serde::{Deserialize, Serialize};

use crate::instance::QuboInstance;

/// One entry of the sparse quadratic form, with `row <= col`.
///
/// `row == col` encodes a linear weight; `row < col` encodes a pairwise
/// weight stored once per unordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticTerm {
    /// Row index.
    pub row: u32,
    /// Column index, `>= row`.
    pub col: u32,
    /// Weight, never exactly zero.
    pub weight: f64,
}

impl QuadraticTerm {
    /// Whether this term encodes a linear weight.
    pub fn is_diagonal(&self) -> bool {
        self.row == self.col
    }
}

/// Convert an instance into its flat term list.
///
/// Diagonal terms come first in index order, followed by off-diagonal
/// terms in the instance's iteration order, forwarded verbatim. Exact
/// floating-point zeros are skipped. An empty instance yields an empty
/// list.
pub fn extract_terms(instance: &QuboInstance) -> Vec<QuadraticTerm> {
    let mut terms = Vec::with_capacity(instance.size() as usize + instance.pair_count());

    for (i, w) in instance.linear_weights() {
        if w != 0.0 {
            terms.push(QuadraticTerm {
                row: i,
                col: i,
                weight: w,
            });
        }
    }

    for (i, j, w) in instance.nonzero_pairs() {
        terms.push(QuadraticTerm {
            row: i,
            col: j,
            weight: w,
        });
    }

    terms
}
