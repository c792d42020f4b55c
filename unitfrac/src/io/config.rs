//! CLI configuration stored in `unitfrac.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::Strategy;
use crate::render::OutputFormat;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "unitfrac.toml";

/// Smallest non-zero `elide_digits` that still leaves room for both kept ends.
pub const MIN_ELIDE_DIGITS: usize = 12;

/// CLI defaults (TOML).
///
/// Command-line flags override these values. Missing fields fall back to
/// `UnitfracConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnitfracConfig {
    /// Strategy used when `--strategy` is not given.
    pub strategy: Strategy,

    /// Output format used when `--format` is not given.
    pub format: OutputFormat,

    /// Shorten text-rendered denominators longer than this many digits (0 = never).
    pub elide_digits: usize,
}

impl Default for UnitfracConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Lookahead,
            format: OutputFormat::Text,
            elide_digits: 40,
        }
    }
}

impl UnitfracConfig {
    pub fn validate(&self) -> Result<()> {
        if self.elide_digits != 0 && self.elide_digits < MIN_ELIDE_DIGITS {
            return Err(anyhow!(
                "elide_digits must be 0 or >= {}, got {}",
                MIN_ELIDE_DIGITS,
                self.elide_digits
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `UnitfracConfig::default()`.
pub fn load_config(path: &Path) -> Result<UnitfracConfig> {
    if !path.exists() {
        return Ok(UnitfracConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UnitfracConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &UnitfracConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
