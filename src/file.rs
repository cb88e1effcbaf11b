use std::fs;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;

/// Read a whole file. An empty file is an error.
pub fn file_read(path: &Utf8Path) -> Result<Vec<u8>> {
    let buffer = fs::read(path).with_context(|| format!("reading {path}"))?;
    if buffer.is_empty() {
        bail!("{path} is empty");
    }
    Ok(buffer)
}

/// Create or truncate `path` and write `data` to it.
pub fn file_write(path: &Utf8Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("writing {path}"))
}
