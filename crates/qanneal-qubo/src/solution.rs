//! Validated QUBO solutions.

use crate::error::{QuboError, QuboResult};
use crate::instance::QuboInstance;

/// Tolerance for agreement between a claimed and a recomputed objective.
const OBJECTIVE_TOLERANCE: f64 = 1e-6;

/// A 0/1 assignment together with its objective value.
///
/// Construction checks the assignment against the instance: the length
/// must match the instance size and every entry must be 0 or 1. With
/// validation enabled the objective is additionally recomputed from the
/// instance and must agree with the claimed value within `1e-6`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuboSolution {
    assignment: Vec<u8>,
    objective: f64,
}

impl QuboSolution {
    /// Build a solution from a solver-returned assignment and objective.
    pub fn new(
        instance: &QuboInstance,
        assignment: Vec<u8>,
        objective: f64,
        validate: bool,
    ) -> QuboResult<Self> {
        if assignment.len() != instance.size() as usize {
            return Err(QuboError::AssignmentLength {
                expected: instance.size(),
                got: assignment.len(),
            });
        }
        if let Some((index, &value)) = assignment.iter().enumerate().find(|&(_, &v)| v > 1) {
            return Err(QuboError::NotBinary { index, value });
        }

        if validate {
            let computed = instance.objective(&assignment);
            if (computed - objective).abs() > OBJECTIVE_TOLERANCE {
                return Err(QuboError::ObjectiveMismatch {
                    claimed: objective,
                    computed,
                });
            }
        }

        Ok(Self {
            assignment,
            objective,
        })
    }

    /// The 0/1 assignment, one entry per variable.
    pub fn assignment(&self) -> &[u8] {
        &self.assignment
    }

    /// The objective value in the maximisation convention.
    pub fn objective(&self) -> f64 {
        self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance() -> QuboInstance {
        let mut instance = QuboInstance::new(3);
        instance.set_linear(0, 1.0).unwrap();
        instance.set_linear(2, -2.0).unwrap();
        instance.set_pair(0, 2, 3.5).unwrap();
        instance
    }

    #[test]
    fn test_accepts_matching_assignment() {
        let instance = sample_instance();
        let sol = QuboSolution::new(&instance, vec![1, 0, 1], 6.0, true).unwrap();
        assert_eq!(sol.assignment(), &[1, 0, 1]);
        assert_eq!(sol.objective(), 6.0);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let instance = sample_instance();
        let err = QuboSolution::new(&instance, vec![1, 0], 0.0, false).unwrap_err();
        assert!(matches!(
            err,
            QuboError::AssignmentLength {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_rejects_empty_assignment() {
        let instance = sample_instance();
        let err = QuboSolution::new(&instance, vec![], 0.0, false).unwrap_err();
        assert!(matches!(err, QuboError::AssignmentLength { got: 0, .. }));
    }

    #[test]
    fn test_rejects_non_binary_entry() {
        let instance = sample_instance();
        let err = QuboSolution::new(&instance, vec![1, 2, 0], 1.0, false).unwrap_err();
        assert!(matches!(err, QuboError::NotBinary { index: 1, value: 2 }));
    }

    #[test]
    fn test_validation_rejects_objective_mismatch() {
        let instance = sample_instance();
        let err = QuboSolution::new(&instance, vec![1, 0, 1], -0.5, true).unwrap_err();
        assert!(matches!(err, QuboError::ObjectiveMismatch { .. }));
    }

    #[test]
    fn test_without_validation_objective_is_trusted() {
        let instance = sample_instance();
        let sol = QuboSolution::new(&instance, vec![1, 0, 1], -0.5, false).unwrap();
        assert_eq!(sol.objective(), -0.5);
    }

    #[test]
    fn test_validation_tolerates_rounding() {
        let instance = sample_instance();
        let sol = QuboSolution::new(&instance, vec![1, 0, 1], 6.0 + 1e-9, true).unwrap();
        assert!((sol.objective() - 6.0).abs() < 1e-6);
    }
}
