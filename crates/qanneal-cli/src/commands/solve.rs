//! Solve command implementation.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use console::style;

use qanneal_adapter_dwave::AnnealHeuristic;
use qanneal_bridge::Backend;
use qanneal_qubo::BestSolutionSink;

use super::common::load_instance;

/// Execute the solve command.
pub fn execute(
    input: &Path,
    backend: &str,
    config: Option<&Path>,
    validate: bool,
    time_limit: f64,
) -> Result<()> {
    let backend: Backend = backend.parse()?;

    println!(
        "{} Solving {} on {}",
        style("→").cyan().bold(),
        style(input.display()).green(),
        style(backend).yellow()
    );

    let instance = load_instance(input)?;
    println!(
        "  Loaded: {} variables, {} pairwise entries",
        instance.size(),
        instance.pair_count()
    );

    let mut heuristic = AnnealHeuristic::new(backend);
    if let Some(config) = config {
        heuristic = heuristic.with_config_path(config);
    }

    let mut sink = BestSolutionSink::new();
    heuristic.run(
        &instance,
        Duration::from_secs_f64(time_limit),
        validate,
        &mut sink,
    );

    match sink.best() {
        Some(solution) => {
            println!(
                "{} objective {}",
                style("✓").green().bold(),
                style(solution.objective()).bold()
            );
            println!("  assignment {}", format_assignment(solution.assignment()));
            Ok(())
        }
        None => anyhow::bail!("backend '{backend}' produced no solution"),
    }
}

fn format_assignment(assignment: &[u8]) -> String {
    assignment.iter().map(|&x| char::from(b'0' + x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_assignment() {
        assert_eq!(format_assignment(&[1, 0, 1]), "101");
        assert_eq!(format_assignment(&[]), "");
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = execute(Path::new("missing.qubo"), "tabu", None, false, 1.0).unwrap_err();
        assert!(err.to_string().contains("tabu"));
    }
}
