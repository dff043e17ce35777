// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Optional JSON configuration supplying defaults for command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;

/// Defaults read from `--config`. Flags given on the command line win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Geom2GraphConfig {
    /// Snap distance for an explicit snapping noder.
    pub tolerance: Option<f64>,
    /// Scale of a fixed precision model.
    pub precision_scale: Option<f64>,
    /// Graph output format.
    pub format: Option<OutputFormat>,
}

/// Error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while reading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Source of raw config bytes.
pub trait ConfigStore {
    /// Load the raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self) -> Result<Vec<u8>, ConfigError>;
}

/// Reads the config from a single file on disk.
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store backed by `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl ConfigStore for FileConfigStore {
    fn load_raw(&self) -> Result<Vec<u8>, ConfigError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ConfigError::NotFound(self.path.clone()))
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }
}

/// Loads and deserializes the config. An empty blob yields the defaults.
pub fn load_config<S: ConfigStore>(store: &S) -> Result<Geom2GraphConfig, ConfigError> {
    let bytes = store.load_raw()?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Geom2GraphConfig::default());
    }
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    struct MemStore(&'static str);

    impl ConfigStore for MemStore {
        fn load_raw(&self) -> Result<Vec<u8>, ConfigError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    #[test]
    fn partial_config_leaves_other_fields_unset() {
        let config = load_config(&MemStore(r#"{"format": "json"}"#)).unwrap();
        assert_eq!(
            config,
            Geom2GraphConfig { format: Some(OutputFormat::Json), ..Geom2GraphConfig::default() }
        );
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(load_config(&MemStore("  \n")).unwrap(), Geom2GraphConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(load_config(&MemStore(r#"{"tolerence": 1}"#)), Err(ConfigError::Serde(_))));
    }

    #[test]
    fn missing_file_is_not_found() {
        let store = FileConfigStore::new("/definitely/not/here.json");
        assert!(matches!(load_config(&store), Err(ConfigError::NotFound(_))));
    }
}
