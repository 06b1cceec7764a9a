//! CLI command implementations.

pub mod normalize;
pub mod routes;
pub mod schemas;
pub mod validate;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Human-readable name of the payload source, for error context.
pub(crate) fn source_name(file: Option<&Path>) -> String {
    match file {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Read a payload from `file`, or from stdin when it is absent or `-`.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(None), "stdin");
        assert_eq!(source_name(Some(Path::new("-"))), "stdin");
        assert_eq!(source_name(Some(Path::new("a.json"))), "a.json");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"status": "OK"}}"#).unwrap();
        let body = read_input(Some(file.path())).unwrap();
        assert_eq!(body, r#"{"status": "OK"}"#);
    }

    #[test]
    fn test_read_input_missing_file() {
        let path = PathBuf::from("/nonexistent/historian/payload.json");
        let err = read_input(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read /nonexistent/historian/payload.json"));
    }
}
