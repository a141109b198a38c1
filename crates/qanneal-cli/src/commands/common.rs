//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qanneal_qubo::QuboInstance;

/// Load a QUBO instance from a sparse text file.
///
/// Format: a header line `n m` (variable count, entry count), followed by
/// `i j w` lines with 1-indexed variables. `i == j` rows set linear
/// weights, `i != j` rows set pairwise weights, each unordered pair given
/// at most once. Blank lines and `#` comments are skipped.
pub fn load_instance(path: &Path) -> Result<QuboInstance> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read instance file: {}", path.display()))?;

    let mut lines = source
        .lines()
        .enumerate()
        .map(|(no, line)| (no + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_no, header) = lines.next().context("instance file is empty")?;
    let mut header_fields = header.split_whitespace();
    let size: u32 = header_fields
        .next()
        .context("missing variable count in header")?
        .parse()
        .with_context(|| format!("line {header_no}: bad variable count"))?;
    let declared_entries: usize = header_fields
        .next()
        .context("missing entry count in header")?
        .parse()
        .with_context(|| format!("line {header_no}: bad entry count"))?;

    let mut instance = QuboInstance::new(size);
    let mut entries = 0usize;

    for (no, line) in lines {
        let mut fields = line.split_whitespace();
        let entry = (|| -> Option<(u32, u32, f64)> {
            let i: u32 = fields.next()?.parse().ok()?;
            let j: u32 = fields.next()?.parse().ok()?;
            let w: f64 = fields.next()?.parse().ok()?;
            Some((i, j, w))
        })();
        let (i, j, w) = entry.with_context(|| format!("line {no}: expected 'i j w'"))?;

        if i == 0 || j == 0 {
            anyhow::bail!("line {no}: variable indices are 1-based");
        }
        // 1-indexed on disk, 0-indexed in memory.
        let (i, j) = (i - 1, j - 1);
        if i == j {
            instance
                .set_linear(i, w)
                .with_context(|| format!("line {no}"))?;
        } else {
            instance
                .set_pair(i, j, w)
                .with_context(|| format!("line {no}"))?;
        }
        entries += 1;
    }

    if entries != declared_entries {
        tracing::warn!(
            declared = declared_entries,
            found = entries,
            "entry count in header disagrees with file body"
        );
    }

    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_instance(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sparse_instance() {
        let file = write_instance("3 3\n1 1 1.0\n3 3 -2.0\n1 3 3.5\n");
        let instance = load_instance(file.path()).unwrap();
        assert_eq!(instance.size(), 3);
        assert_eq!(instance.linear_weight(0), 1.0);
        assert_eq!(instance.linear_weight(2), -2.0);
        let pairs: Vec<_> = instance.nonzero_pairs().collect();
        assert_eq!(pairs, vec![(0, 2, 3.5)]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let file = write_instance("# a tiny instance\n\n2 1\n1 2 -1.0\n");
        let instance = load_instance(file.path()).unwrap();
        assert_eq!(instance.size(), 2);
        assert_eq!(instance.nonzero_pairs().count(), 1);
    }

    #[test]
    fn test_zero_index_rejected() {
        let file = write_instance("2 1\n0 1 1.0\n");
        let err = load_instance(file.path()).unwrap_err();
        assert!(err.to_string().contains("1-based"));
    }

    #[test]
    fn test_malformed_row_rejected() {
        let file = write_instance("2 1\n1 2\n");
        let err = load_instance(file.path()).unwrap_err();
        assert!(err.to_string().contains("expected 'i j w'"));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let file = write_instance("2 1\n1 5 1.0\n");
        assert!(load_instance(file.path()).is_err());
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = write_instance("");
        assert!(load_instance(file.path()).is_err());
    }
}
