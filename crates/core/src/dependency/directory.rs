//! Filesystem directory dependencies

use std::fs;
use std::io;

use serde::{Deserialize, Deserializer, de};

use crate::Result;
use crate::config::expand;
use crate::error::CoreError;
use crate::groups::GroupList;

fn default_mode() -> u32 {
    0o755
}

/// Decode a permission mode from either an integer (`0o755`) or a string
///
/// YAML 1.2 has no leading-zero octal form, so manifests written for the
/// original tool carry `permissions: 0755` as a plain scalar that decodes
/// as a string. String forms parse as octal, with or without a `0o` prefix.
fn deserialize_mode<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct ModeVisitor;

    impl de::Visitor<'_> for ModeVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a permission mode such as 0o755 or \"0755\"")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<u32, E> {
            u32::try_from(value).map_err(|_| E::custom(format!("mode out of range: {}", value)))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<u32, E> {
            u32::try_from(value).map_err(|_| E::custom(format!("mode out of range: {}", value)))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<u32, E> {
            let digits = value.strip_prefix("0o").unwrap_or(value);
            u32::from_str_radix(digits, 8)
                .map_err(|_| E::custom(format!("invalid permission mode: '{}'", value)))
        }
    }

    deserializer.deserialize_any(ModeVisitor)
}

/// A directory that must exist with the declared permission bits
///
/// The path may reference environment variables; it is expanded before
/// every probe and creation.
#[derive(Debug, Clone, Deserialize)]
pub struct Directory {
    pub path: String,
    /// Unix mode, e.g. `0o750` or `0755`; defaults to `0o755`
    #[serde(default = "default_mode", deserialize_with = "deserialize_mode")]
    pub permissions: u32,
    #[serde(default)]
    pub groups: GroupList,
}

impl Directory {
    /// Path-existence probe
    ///
    /// NotFound means "not installed"; any other stat error is fatal.
    pub fn exists(&self) -> Result<bool> {
        let path = expand(&self.path)?;
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CoreError::Probe { path, source }),
        }
    }

    /// Create the full directory tree with the declared mode
    ///
    /// Creating an existing tree is a no-op, so this is safe to re-run.
    pub fn ensure_installation(&self) -> Result<()> {
        let path = expand(&self.path)?;
        fs::create_dir_all(&path)?;
        set_mode(&path, self.permissions)?;
        Ok(())
    }
}

#[cfg(unix)]
fn set_mode(path: &str, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(windows)]
fn set_mode(_path: &str, _mode: u32) -> Result<()> {
    // Windows doesn't use Unix permissions
    Ok(())
}
