//! Sparse QUBO instance representation.
//!
//! An instance stores a dense vector of linear weights and a sparse set of
//! pairwise weights. Each unordered pair is held exactly once, normalized
//! to `(min, max)` at insertion, so downstream consumers never see a
//! symmetric duplicate.

use rustc_hash::FxHashMap;

use crate::error::{QuboError, QuboResult};

/// A QUBO problem instance over binary variables.
///
/// The objective follows the maximisation convention: each off-diagonal
/// weight contributes `2·w_ij·x_i·x_j`, each linear weight `lin[i]·x_i`.
///
/// Pairwise weights keep the order in which their pairs were first set;
/// re-setting a pair overwrites its weight in place.
#[derive(Debug, Clone, Default)]
pub struct QuboInstance {
    /// Linear weights, one per variable.
    linear: Vec<f64>,
    /// Off-diagonal weights, each unordered pair stored once as `(min, max)`.
    pairs: Vec<(u32, u32, f64)>,
    /// Pair -> position in `pairs`, for overwrite-in-place semantics.
    pair_index: FxHashMap<(u32, u32), usize>,
}

impl QuboInstance {
    /// Create an empty instance with `size` variables and all weights zero.
    pub fn new(size: u32) -> Self {
        Self {
            linear: vec![0.0; size as usize],
            pairs: Vec::new(),
            pair_index: FxHashMap::default(),
        }
    }

    /// Number of variables.
    pub fn size(&self) -> u32 {
        self.linear.len() as u32
    }

    /// Number of stored pairwise entries (including any set to zero).
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Set the linear weight of variable `i`.
    pub fn set_linear(&mut self, i: u32, weight: f64) -> QuboResult<()> {
        self.check_index(i)?;
        self.linear[i as usize] = weight;
        Ok(())
    }

    /// Set the pairwise weight of the unordered pair `{i, j}`.
    ///
    /// The pair is normalized to `(min, max)`; setting `(j, i)` after
    /// `(i, j)` overwrites the same entry.
    pub fn set_pair(&mut self, i: u32, j: u32, weight: f64) -> QuboResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j {
            return Err(QuboError::DiagonalPair { index: i });
        }
        let key = (i.min(j), i.max(j));
        match self.pair_index.get(&key) {
            Some(&pos) => self.pairs[pos].2 = weight,
            None => {
                self.pair_index.insert(key, self.pairs.len());
                self.pairs.push((key.0, key.1, weight));
            }
        }
        Ok(())
    }

    /// Linear weight of variable `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn linear_weight(&self, i: u32) -> f64 {
        self.linear[i as usize]
    }

    /// Iterate over all linear weights in index order.
    pub fn linear_weights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.linear.iter().enumerate().map(|(i, &w)| (i as u32, w))
    }

    /// Iterate over the nonzero off-diagonal entries, each unordered pair
    /// yielded exactly once with `row <= col`, in insertion order.
    pub fn nonzero_pairs(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        self.pairs.iter().copied().filter(|&(_, _, w)| w != 0.0)
    }

    /// Evaluate the maximisation objective of a 0/1 assignment.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` is shorter than the instance size. Use
    /// [`QuboSolution`](crate::QuboSolution) for validated construction.
    pub fn objective(&self, assignment: &[u8]) -> f64 {
        let mut total = 0.0;
        for (i, w) in self.linear_weights() {
            if assignment[i as usize] != 0 {
                total += w;
            }
        }
        for (i, j, w) in self.nonzero_pairs() {
            if assignment[i as usize] != 0 && assignment[j as usize] != 0 {
                total += 2.0 * w;
            }
        }
        total
    }

    fn check_index(&self, i: u32) -> QuboResult<()> {
        if i >= self.size() {
            return Err(QuboError::IndexOutOfRange {
                index: i,
                size: self.size(),
            });
        }
        Ok(())
    }
}
