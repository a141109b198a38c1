//! Terms command implementation.

use std::path::Path;

use anyhow::Result;

use qanneal_qubo::extract_terms;

use super::common::load_instance;

/// Execute the terms command: print the extracted term list as JSON.
pub fn execute(input: &Path) -> Result<()> {
    let instance = load_instance(input)?;
    let terms = extract_terms(&instance);
    serde_json::to_writer_pretty(std::io::stdout().lock(), &terms)?;
    println!();
    Ok(())
}
