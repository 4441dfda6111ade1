//! Cloned-repository dependencies

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::Result;
use crate::config::Config;
use crate::dependency::Common;
use crate::exec::{Cmd, command_on_path, run_cmd};

/// A repository cloned under the configured clone root, with optional
/// post-install commands run inside the clone
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// `owner/name` identifier, templated into the clone URL
    pub repo: String,
    #[serde(default)]
    pub install_commands: Vec<Cmd>,
    #[serde(flatten)]
    pub common: Common,
}

impl Repository {
    pub fn exists(&self) -> bool {
        command_on_path(&self.common.command)
    }

    /// `<repos_directory>/<basename of repo>`
    pub fn relative_base(&self, config: &Config) -> String {
        let basename = self.repo.rsplit('/').next().unwrap_or(&self.repo);
        format!("{}/{}", config.repos_directory, basename)
    }

    /// Clone if the target directory is missing, then run every post-install
    /// command inside it
    ///
    /// The clone check is directory presence only; post-install commands
    /// always re-run, even when the clone was already there.
    pub fn ensure_installation(&self, config: &Config) -> Result<()> {
        let repo_path = self.relative_base(config);

        if Path::new(&repo_path).is_dir() {
            info!(repo = %self.repo, "repository already cloned");
        } else {
            info!(repo = %self.repo, "cloning repository");
            self.clone_repo(config)?;
        }

        for cmd in &self.install_commands {
            run_cmd(cmd, Some(Path::new(&repo_path)))?;
        }

        Ok(())
    }

    fn clone_repo(&self, config: &Config) -> Result<()> {
        let clone = Cmd::new(
            "git",
            ["clone".to_string(), format!("git@github.com:{}.git", self.repo)],
        );
        run_cmd(&clone, Some(Path::new(&config.repos_directory)))
    }
}
