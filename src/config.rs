use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use crippy::PlistFormat;
use serde::Deserialize;

const DEFAULT_DIR_MODE: u32 = 0o755;

/// Optional settings loaded from `~/.crippy/config.toml` by default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrippyConfig {
    /// Octal permission bits for directories created by `crippy mkdir`.
    pub dir_mode: Option<String>,
    /// Output encoding for `crippy plist convert` when `--format` is absent.
    pub plist_format: Option<PlistFormat>,
}

impl CrippyConfig {
    pub fn dir_mode(&self) -> Result<u32> {
        match &self.dir_mode {
            Some(raw) => parse_mode(raw),
            None => Ok(DEFAULT_DIR_MODE),
        }
    }

    pub fn plist_format(&self) -> PlistFormat {
        self.plist_format.unwrap_or_default()
    }
}

pub fn default_path() -> Result<Utf8PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let path = home.join(".crippy").join("config.toml");
    Utf8PathBuf::from_path_buf(path).map_err(|_| anyhow!("config path is not valid UTF-8"))
}

/// Load `path`, falling back to defaults when the file does not exist.
pub fn load(path: &Utf8Path) -> Result<CrippyConfig> {
    if !path.exists() {
        return Ok(CrippyConfig::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    parse(&raw).with_context(|| format!("parsing config {}", path))
}

pub fn parse(raw: &str) -> Result<CrippyConfig> {
    let config: CrippyConfig = toml::from_str(raw)?;
    config.dir_mode()?;
    Ok(config)
}

/// Parse an octal mode such as `755`, `0755` or `0o755`.
pub fn parse_mode(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
    let mode = u32::from_str_radix(digits, 8)
        .with_context(|| format!("invalid octal mode `{raw}`"))?;
    if mode > 0o7777 {
        return Err(anyhow!("mode `{raw}` is out of range"));
    }
    Ok(mode)
}
