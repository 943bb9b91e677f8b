//! Optional ledger configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Settings read from an optional `config.toml`.
///
/// Everything has a working default; the file only exists to override.
/// Unknown keys are ignored so old binaries tolerate newer files.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LedgerConfig {
    /// Directory holding the persisted records. Falls back to the
    /// repository's default location when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl LedgerConfig {
    /// Loads configuration from the given path.
    ///
    /// A missing or empty file yields the default configuration; only a
    /// file that exists but cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_default() {
        let config = LedgerConfig::load("/nonexistent/config.toml").unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_data_dir_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/tmp/poker\"").unwrap();

        let config = LedgerConfig::load(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/poker")));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/tmp/poker\"\nfuture_knob = true").unwrap();

        let config = LedgerConfig::load(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/poker")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = [not toml").unwrap();
        assert!(LedgerConfig::load(file.path()).is_err());
    }
}
