//! Seed file loading and shutdown persistence.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::store::Proverb;

/// Errors reading or writing the proverb data file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Load a JSON array of proverbs from `path`.
pub fn load_proverbs(path: &Path) -> Result<Vec<Proverb>, PersistenceError> {
    let file = File::open(path).map_err(|e| PersistenceError::io(path, e))?;
    let reader = BufReader::new(file);
    let proverbs: Vec<Proverb> =
        serde_json::from_reader(reader).map_err(|e| PersistenceError::json(path, e))?;

    tracing::info!(path = %path.display(), count = proverbs.len(), "Loaded proverbs");
    Ok(proverbs)
}

/// Write `proverbs` to `path` as a JSON array, replacing the file.
pub fn save_proverbs(path: &Path, proverbs: &[Proverb]) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(|e| PersistenceError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, proverbs).map_err(|e| PersistenceError::json(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| PersistenceError::io(path, e))?;

    tracing::info!(path = %path.display(), count = proverbs.len(), "Saved proverbs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proverbs.json");

        let proverbs = vec![Proverb::new(1, "A"), Proverb::new(5, "E")];
        save_proverbs(&path, &proverbs).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "[{\"id\":1,\"text\":\"A\"},{\"id\":5,\"text\":\"E\"}]\n");
        assert_eq!(load_proverbs(&path).unwrap(), proverbs);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_proverbs(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"id\": 1").unwrap();
        let err = load_proverbs(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Json { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/proverbs.json");
        assert!(save_proverbs(&path, &[]).is_err());
    }
}
