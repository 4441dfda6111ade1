//! System-package dependencies

use serde::Deserialize;

use crate::Result;
use crate::dependency::Common;
use crate::exec::{Cmd, command_on_path, run_cmd};

/// A formula installed through the system package manager
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub formula: String,
    #[serde(flatten)]
    pub common: Common,
}

impl Package {
    pub fn exists(&self) -> bool {
        command_on_path(&self.common.command)
    }

    /// `brew install <formula>`, with the installer's output streamed through
    pub fn ensure_installation(&self) -> Result<()> {
        let install = Cmd::new("brew", ["install", self.formula.as_str()]);
        run_cmd(&install, None)
    }
}
