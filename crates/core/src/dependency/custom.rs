//! Custom command-sequence dependencies

use serde::Deserialize;

use crate::Result;
use crate::dependency::Common;
use crate::exec::{Cmd, command_on_path, run_cmd};

/// An arbitrary sequence of install commands, keyed on the executable
/// they are expected to produce
#[derive(Debug, Clone, Deserialize)]
pub struct Custom {
    #[serde(default)]
    pub install_commands: Vec<Cmd>,
    #[serde(flatten)]
    pub common: Common,
}

impl Custom {
    pub fn exists(&self) -> bool {
        command_on_path(&self.common.command)
    }

    /// Run every declared command in order with the inherited working
    /// directory; the first failure aborts
    pub fn ensure_installation(&self) -> Result<()> {
        for cmd in &self.install_commands {
            run_cmd(cmd, None)?;
        }
        Ok(())
    }
}
