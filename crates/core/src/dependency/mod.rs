//! The polymorphic dependency model
//!
//! Every manifest entry is one of four kinds, discriminated by the `type`
//! key: a system package, a custom command sequence, a directory, or a
//! cloned repository. The kinds form a closed enum so the orchestrator's
//! handling is exhaustive; an unknown discriminator is a decode error.

mod custom;
mod directory;
mod package;
mod repository;

pub use custom::Custom;
pub use directory::Directory;
pub use package::Package;
pub use repository::Repository;

use serde::Deserialize;

use crate::Result;
use crate::config::Config;
use crate::env::ShellEnv;
use crate::groups::{GroupList, has_at_least_one_group};

/// Fields shared by the kinds that probe a command and contribute
/// shell-environment lines
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Common {
    /// Executable name used for the existence probe
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub groups: GroupList,
    #[serde(flatten)]
    pub shell_env: ShellEnv,
}

/// One declared unit of desired host state
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Dependency {
    Package(Package),
    Custom(Custom),
    Directory(Directory),
    Repository(Repository),
}

impl Dependency {
    /// Kind-specific identity: the probed command name, or the path for
    /// directory dependencies
    pub fn name(&self) -> &str {
        match self {
            Dependency::Package(package) => &package.common.command,
            Dependency::Custom(custom) => &custom.common.command,
            Dependency::Directory(directory) => &directory.path,
            Dependency::Repository(repository) => &repository.common.command,
        }
    }

    pub fn groups(&self) -> &GroupList {
        match self {
            Dependency::Package(package) => &package.common.groups,
            Dependency::Custom(custom) => &custom.common.groups,
            Dependency::Directory(directory) => &directory.groups,
            Dependency::Repository(repository) => &repository.common.groups,
        }
    }

    pub fn has_at_least_one_group(&self, requested: &GroupList) -> bool {
        has_at_least_one_group(self.name(), self.groups(), requested)
    }

    /// Idempotency probe; semantics vary by kind
    ///
    /// Command-probing kinds cannot fail; the directory kind treats any
    /// stat error other than NotFound as fatal.
    pub fn exists(&self) -> Result<bool> {
        match self {
            Dependency::Package(package) => Ok(package.exists()),
            Dependency::Custom(custom) => Ok(custom.exists()),
            Dependency::Directory(directory) => directory.exists(),
            Dependency::Repository(repository) => Ok(repository.exists()),
        }
    }

    pub fn ensure_installation(&self, config: &Config) -> Result<()> {
        match self {
            Dependency::Package(package) => package.ensure_installation(),
            Dependency::Custom(custom) => custom.ensure_installation(),
            Dependency::Directory(directory) => directory.ensure_installation(),
            Dependency::Repository(repository) => repository.ensure_installation(config),
        }
    }

    /// The environment contribution, for kinds that carry one
    pub fn shell_env(&self) -> Option<&ShellEnv> {
        match self {
            Dependency::Package(package) => Some(&package.common.shell_env),
            Dependency::Custom(custom) => Some(&custom.common.shell_env),
            Dependency::Directory(_) => None,
            Dependency::Repository(repository) => Some(&repository.common.shell_env),
        }
    }

    /// Base path that relative environment entries resolve against
    ///
    /// Only repositories have one; every other kind declares absolute
    /// entries only.
    pub fn relative_base(&self, config: &Config) -> String {
        match self {
            Dependency::Repository(repository) => repository.relative_base(config),
            _ => String::new(),
        }
    }
}
