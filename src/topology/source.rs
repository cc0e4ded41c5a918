/*!
Input side of the topology builder.

This module defines:
- `ConfigInput`: one device's running-config text plus the identifier it came from.
- `TopologyError`: errors that abort a build.
- `ConfigSource`: a small trait that hands the builder its ordered inputs.

Adapters (e.g. files on disk) implement `ConfigSource` and hide where the text came from.
*/

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Raw config text for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigInput {
    /// Where the text came from, usually a file path.
    pub id: String,
    pub text: String,
}

impl ConfigInput {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Device key used when the config sets no hostname: the file stem of `id`.
    pub fn fallback_key(&self) -> String {
        Path::new(&self.id)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.id.clone())
    }
}

/// Error type for topology construction.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input discovery failed: {0}")]
    Discovery(String),
    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result alias for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Supplies the configs a topology is built from, in the order they should be processed.
pub trait ConfigSource {
    fn fetch_inputs(&mut self) -> TopologyResult<Vec<ConfigInput>>;
}

/// Inputs already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    inputs: Vec<ConfigInput>,
}

impl StaticSource {
    pub fn new(inputs: Vec<ConfigInput>) -> Self {
        Self { inputs }
    }
}

impl ConfigSource for StaticSource {
    fn fetch_inputs(&mut self) -> TopologyResult<Vec<ConfigInput>> {
        Ok(self.inputs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_key() {
        assert_eq!(ConfigInput::new("configs/core-sw1.txt", "").fallback_key(), "core-sw1");
        assert_eq!(ConfigInput::new("/tmp/r1.cfg.txt", "").fallback_key(), "r1.cfg");
        assert_eq!(ConfigInput::new("edge", "").fallback_key(), "edge");
        assert_eq!(ConfigInput::new("", "").fallback_key(), "");
    }

    #[test]
    fn test_static_source_keeps_order() {
        let mut source = StaticSource::new(vec![
            ConfigInput::new("b", "hostname B"),
            ConfigInput::new("a", "hostname A"),
        ]);
        let ids: Vec<_> = source
            .fetch_inputs()
            .unwrap()
            .into_iter()
            .map(|input| input.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
