//! Solver results.

use serde::{Deserialize, Serialize};

/// Outcome of one external solve.
///
/// Lives only within the invocation that produced it. The assignment has
/// one 0/1 entry per variable; its length is checked against the instance
/// by whoever builds a solution from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// 0/1 assignment, one entry per variable.
    pub assignment: Vec<u8>,
    /// Objective value in the maximisation convention.
    pub objective: f64,
}

impl SolverResult {
    /// Whether the assignment carries no entries.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        let empty = SolverResult {
            assignment: vec![],
            objective: 0.0,
        };
        assert!(empty.is_empty());

        let full = SolverResult {
            assignment: vec![1, 0, 1],
            objective: -0.5,
        };
        assert!(!full.is_empty());
    }
}
