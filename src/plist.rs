//! Plist load/save on top of the `plist` crate.
//!
//! Decoding sniffs the `bplist00` marker to choose between the binary and
//! XML readers. Encoding takes the format explicitly.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use ::plist::Value;
use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use serde::Deserialize;
use tracing::debug;

use crate::file::{file_read, file_write};

/// Leading bytes of every binary plist.
pub const BINARY_MAGIC: &[u8; 8] = b"bplist00";

#[derive(Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PlistFormat {
    #[default]
    Xml,
    Binary,
}

impl PlistFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlistFormat::Xml => "xml",
            PlistFormat::Binary => "binary",
        }
    }

    /// Guess the encoding of a serialized buffer. Anything that does not
    /// start with the binary marker is treated as XML.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.len() > BINARY_MAGIC.len() && bytes.starts_with(BINARY_MAGIC) {
            PlistFormat::Binary
        } else {
            PlistFormat::Xml
        }
    }
}

impl fmt::Display for PlistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlistFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(PlistFormat::Xml),
            "binary" | "bin" => Ok(PlistFormat::Binary),
            other => Err(anyhow!("unsupported plist format `{other}`")),
        }
    }
}

pub fn decode_plist(bytes: &[u8]) -> Result<Value> {
    let format = PlistFormat::sniff(bytes);
    debug!(%format, len = bytes.len(), "decoding plist");
    match format {
        PlistFormat::Binary => {
            Value::from_reader(Cursor::new(bytes)).context("decoding binary plist")
        }
        PlistFormat::Xml => Value::from_reader_xml(bytes).context("decoding XML plist"),
    }
}

pub fn encode_plist(value: &Value, format: PlistFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        PlistFormat::Binary => value
            .to_writer_binary(&mut buffer)
            .context("encoding binary plist")?,
        PlistFormat::Xml => value
            .to_writer_xml(&mut buffer)
            .context("encoding XML plist")?,
    }
    debug!(%format, len = buffer.len(), "encoded plist");
    Ok(buffer)
}

/// Load a plist file in either encoding.
pub fn plist_read(path: &Utf8Path) -> Result<Value> {
    let buffer = file_read(path)?;
    decode_plist(&buffer).with_context(|| format!("parsing plist {path}"))
}

/// Save `value` to `path` in the requested encoding.
pub fn plist_write(path: &Utf8Path, value: &Value, format: PlistFormat) -> Result<()> {
    let buffer = encode_plist(value, format)?;
    file_write(path, &buffer)
}
