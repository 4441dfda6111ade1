//! Shell-environment output files
//!
//! Each run starts by stamping every configured output file with a fixed
//! auto-generated banner; selected dependencies then append their PATH
//! exports and source directives in manifest order. Appends are plain
//! open-append-close per call, so ordering across dependencies is exactly
//! manifest order.

use std::fs::{File, OpenOptions};
use std::io::Write;

use serde::Deserialize;
use tracing::debug;

use crate::Result;
use crate::config::Config;

/// Entries destined for the POSIX-shell output files
///
/// Relative entries are resolved against the dependency's relative base
/// (for repositories, the clone directory).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DotFile {
    #[serde(default)]
    pub relative_paths: Vec<String>,
    #[serde(default)]
    pub absolute_paths: Vec<String>,
    #[serde(default)]
    pub relative_source_directives: Vec<String>,
    #[serde(default)]
    pub absolute_source_directives: Vec<String>,
}

/// Entries destined for the fish output file; fish has no source directives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FishFile {
    #[serde(default)]
    pub relative_paths: Vec<String>,
    #[serde(default)]
    pub absolute_paths: Vec<String>,
}

/// A dependency's declared environment contribution
///
/// The same `dotfile` payload feeds both POSIX outputs (env and rc) when
/// both are configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShellEnv {
    #[serde(default)]
    pub dotfile: DotFile,
    #[serde(default)]
    pub fish: FishFile,
}

const BANNER: &str = "# *******     AUTOGENERATED FILE     *******\n\
                      # ----- created by dotup. DO NOT EDIT -----\n\n";

/// Truncate-create `path` and stamp it with the auto-generated banner
pub fn init_generated_file(path: &str) -> Result<()> {
    debug!(path = %path, "initializing generated file");
    let mut file = File::create(path)?;
    file.write_all(BANNER.as_bytes())?;
    Ok(())
}

/// Append one dependency's contribution to every configured output file
pub fn write_files(config: &Config, shell_env: &ShellEnv, relative_base: &str) -> Result<()> {
    if let Some(fish_file) = &config.fish_file {
        append_fish_file(fish_file, &shell_env.fish, relative_base)?;
    }

    if let Some(env_file) = &config.env_file {
        append_dot_file(env_file, &shell_env.dotfile, relative_base)?;
    }

    if let Some(rc_file) = &config.rc_file {
        append_dot_file(rc_file, &shell_env.dotfile, relative_base)?;
    }

    Ok(())
}

fn open_append(path: &str) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

fn append_dot_file(filename: &str, dotfile: &DotFile, relative_base: &str) -> Result<()> {
    let mut file = open_append(filename)?;

    for path in &dotfile.relative_paths {
        writeln!(file, "export PATH=\"$PATH:{}/{}\"", relative_base, path)?;
    }

    for path in &dotfile.absolute_paths {
        writeln!(file, "export PATH=\"$PATH:{}\"", path)?;
    }

    for path in &dotfile.relative_source_directives {
        writeln!(file, "source {}/{}", relative_base, path)?;
    }

    for path in &dotfile.absolute_source_directives {
        writeln!(file, "source {}", path)?;
    }

    Ok(())
}

fn append_fish_file(filename: &str, fish: &FishFile, relative_base: &str) -> Result<()> {
    let mut file = open_append(filename)?;

    for path in &fish.relative_paths {
        writeln!(file, "fish_add_path {}/{}", relative_base, path)?;
    }

    for path in &fish.absolute_paths {
        writeln!(file, "fish_add_path {}", path)?;
    }

    Ok(())
}
