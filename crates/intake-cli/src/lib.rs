//! intake CLI support: tracing setup and local file loading.

use anyhow::{Context, Result};
use intake_core::models::CandidateFile;
use std::path::Path;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Read a local file into a candidate for validation and staging.
pub fn read_candidate(path: &Path) -> Result<CandidateFile> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;
    Ok(CandidateFile::new(filename, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_candidate_uses_file_name_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"a,b,c").unwrap();

        let candidate = read_candidate(&path).unwrap();
        assert_eq!(candidate.filename, "notes.csv");
        assert_eq!(candidate.byte_size(), 5);
        assert_eq!(candidate.extension(), "csv");
    }

    #[test]
    fn read_candidate_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_candidate(&dir.path().join("absent.pdf")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
