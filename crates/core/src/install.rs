//! Installation orchestration
//!
//! Drives the per-dependency lifecycle in manifest order: group filter,
//! existence check, install, shell-environment write. Output files are
//! initialized once up front; the first error aborts the run.

use tracing::{debug, info};

use crate::Result;
use crate::config::Config;
use crate::dependency::Dependency;
use crate::env;
use crate::groups::GroupList;

/// Summary of one provisioning run
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Dependencies whose install step ran
    pub installed: Vec<String>,
    /// Dependencies that were already present
    pub already_present: Vec<String>,
    /// Dependencies excluded by the group filter
    pub filtered_out: Vec<String>,
}

/// Run the full provisioning pass over `dependencies`
///
/// Environment contributions are written for every selected dependency,
/// whether or not its install step ran, so a freshly initialized output
/// file always ends up complete.
pub fn install(
    dependencies: &[Dependency],
    config: &Config,
    requested: &GroupList,
) -> Result<InstallReport> {
    init_output_files(config)?;

    let mut report = InstallReport::default();

    for dependency in dependencies {
        let name = dependency.name().to_string();

        if !dependency.has_at_least_one_group(requested) {
            debug!(name = %name, "filtered out");
            report.filtered_out.push(name);
            continue;
        }

        if dependency.exists()? {
            info!(name = %name, "already installed");
            report.already_present.push(name);
        } else {
            info!(name = %name, "ensuring installation");
            dependency.ensure_installation(config)?;
            report.installed.push(name);
        }

        if let Some(shell_env) = dependency.shell_env() {
            env::write_files(config, shell_env, &dependency.relative_base(config))?;
        }
    }

    Ok(report)
}

fn init_output_files(config: &Config) -> Result<()> {
    for path in [&config.fish_file, &config.env_file, &config.rc_file]
        .into_iter()
        .flatten()
    {
        env::init_generated_file(path)?;
    }
    Ok(())
}
