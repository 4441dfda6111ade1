//! Manifest loading and decoding

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::config::RawConfig;
use crate::dependency::Dependency;

/// A decoded manifest: the global config block plus the ordered
/// dependency list
///
/// Dependency order is significant; it is preserved all the way to the
/// generated output files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub config: RawConfig,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Read and decode a YAML manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let manifest = serde_yaml::from_str(&contents)?;
        Ok(manifest)
    }

    /// True when any dependency needs the repository clone root
    pub fn has_repositories(&self) -> bool {
        self.dependencies
            .iter()
            .any(|dependency| matches!(dependency, Dependency::Repository(_)))
    }
}
