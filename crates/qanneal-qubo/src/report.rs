//! Solution reporting seam.
//!
//! Heuristics hand finished solutions to a [`ReportSink`] rather than
//! returning them, matching the callback contract of the surrounding
//! heuristic framework: a failed heuristic simply reports nothing.

use crate::solution::QuboSolution;

/// Receiver for solutions produced by a heuristic.
pub trait ReportSink {
    /// Accept one solution. Called at most once per heuristic invocation.
    fn report(&mut self, solution: &QuboSolution);
}

/// A sink that keeps the best (highest-objective) solution reported so far.
#[derive(Debug, Default)]
pub struct BestSolutionSink {
    best: Option<QuboSolution>,
    reports: usize,
}

impl BestSolutionSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The best solution reported so far, if any.
    pub fn best(&self) -> Option<&QuboSolution> {
        self.best.as_ref()
    }

    /// Total number of reports received.
    pub fn reports(&self) -> usize {
        self.reports
    }
}

impl ReportSink for BestSolutionSink {
    fn report(&mut self, solution: &QuboSolution) {
        self.reports += 1;
        let improved = self
            .best
            .as_ref()
            .is_none_or(|b| solution.objective() > b.objective());
        if improved {
            self.best = Some(solution.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::QuboInstance;

    #[test]
    fn test_keeps_highest_objective() {
        let mut instance = QuboInstance::new(2);
        instance.set_linear(0, 1.0).unwrap();
        instance.set_linear(1, 2.0).unwrap();

        let low = QuboSolution::new(&instance, vec![1, 0], 1.0, true).unwrap();
        let high = QuboSolution::new(&instance, vec![1, 1], 3.0, true).unwrap();

        let mut sink = BestSolutionSink::new();
        assert!(sink.best().is_none());

        sink.report(&low);
        sink.report(&high);
        sink.report(&low);

        assert_eq!(sink.reports(), 3);
        assert_eq!(sink.best().unwrap().objective(), 3.0);
    }
}
