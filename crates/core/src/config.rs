//! Run configuration: the repository clone root and the generated output files

use serde::Deserialize;

use crate::Result;
use crate::error::CoreError;

/// The `config` block exactly as it appears in the manifest
///
/// All fields are optional; an empty output filename disables that output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    /// Directory repositories are cloned under
    #[serde(default)]
    pub repos_directory: String,
    /// POSIX-shell environment file (PATH exports, source directives)
    #[serde(default)]
    pub env_file: String,
    /// POSIX-shell rc file, written with the same payload as `env_file`
    #[serde(default)]
    pub rc_file: String,
    /// Fish-shell file (`fish_add_path` lines only)
    #[serde(default)]
    pub fish_file: String,
}

/// Validated, expanded configuration
///
/// Produced once by [`Config::resolve`] before any backend runs; immutable
/// from then on.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Clone root with environment variables expanded and trailing slashes
    /// trimmed; empty only when no repository dependency is declared
    pub repos_directory: String,
    pub env_file: Option<String>,
    pub rc_file: Option<String>,
    pub fish_file: Option<String>,
}

impl Config {
    /// Validate and expand a raw config block
    ///
    /// Fails when a repository dependency is declared but no clone root is
    /// configured, or when a path references an undefined variable.
    pub fn resolve(raw: RawConfig, has_repositories: bool) -> Result<Self> {
        if has_repositories && raw.repos_directory.is_empty() {
            return Err(CoreError::MissingReposDirectory);
        }

        let repos_directory = if raw.repos_directory.is_empty() {
            String::new()
        } else {
            expand(&raw.repos_directory)?
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            repos_directory,
            env_file: expand_optional(&raw.env_file)?,
            rc_file: expand_optional(&raw.rc_file)?,
            fish_file: expand_optional(&raw.fish_file)?,
        })
    }
}

/// Expand `$VAR`, `${VAR}` and a leading `~` in a path
pub(crate) fn expand(path: &str) -> Result<String> {
    shellexpand::full(path)
        .map(|expanded| expanded.into_owned())
        .map_err(|err| CoreError::Expand {
            path: path.to_string(),
            message: err.to_string(),
        })
}

fn expand_optional(path: &str) -> Result<Option<String>> {
    if path.is_empty() {
        Ok(None)
    } else {
        expand(path).map(Some)
    }
}
