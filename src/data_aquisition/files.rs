use std::path::{Path, PathBuf};

use log::debug;

use crate::topology::source::{ConfigInput, ConfigSource, TopologyError, TopologyResult};

/// Reads running-configs from an ordered list of files.
#[derive(Debug, Clone)]
pub struct FileSource {
    paths: Vec<PathBuf>,
}

impl FileSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Finds the files in `dir` matching `pattern` (e.g. `*.txt`), sorted by path.
    pub fn discover(dir: &Path, pattern: &str) -> TopologyResult<Self> {
        let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
        let full_pattern = Path::new(&escaped_dir).join(pattern);
        let full_pattern = full_pattern.to_string_lossy();
        let entries = glob::glob(&full_pattern)
            .map_err(|e| TopologyError::Discovery(format!("bad pattern {full_pattern}: {e}")))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| TopologyError::Discovery(e.to_string()))?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        debug!("discovered {} config file(s) matching {full_pattern}", paths.len());
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Reads one config file. Bytes that are not valid UTF-8 are replaced.
pub fn read_config(path: &Path) -> TopologyResult<ConfigInput> {
    let bytes = std::fs::read(path).map_err(|source| TopologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ConfigInput::new(
        path.to_string_lossy(),
        String::from_utf8_lossy(&bytes),
    ))
}

impl ConfigSource for FileSource {
    fn fetch_inputs(&mut self) -> TopologyResult<Vec<ConfigInput>> {
        self.paths.iter().map(|path| read_config(path)).collect()
    }
}
