//! Input reading helpers

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read text from a file, or from stdin when the path is `-` or absent
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "sold 450 units").unwrap();
        assert_eq!(read_text(Some(&path)).unwrap(), "sold 450 units");
    }

    #[test]
    fn missing_file_mentions_the_path() {
        let err = read_text(Some(Path::new("/no/such/file.txt"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.txt"));
    }
}
