//! dotup-core: Core logic for dotup
//!
//! Decodes a YAML manifest describing desired host state (packages, cloned
//! repositories, directories, custom command sequences) and brings the host
//! up to date, appending PATH exports and source directives to the generated
//! shell files.

mod config;
mod dependency;
mod env;
mod error;
mod exec;
mod groups;
mod install;
mod manifest;

pub use config::{Config, RawConfig};
pub use dependency::{Common, Custom, Dependency, Directory, Package, Repository};
pub use env::{DotFile, FishFile, ShellEnv, init_generated_file, write_files};
pub use error::CoreError;
pub use exec::{Cmd, command_on_path, run_cmd};
pub use groups::{DEFAULT_GROUP, GroupList, has_at_least_one_group};
pub use install::{InstallReport, install};
pub use manifest::Manifest;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
