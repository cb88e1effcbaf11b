use std::io::{self, Write};

use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8PathBuf;
use crippy::PlistFormat;
use tracing::{debug, info};

use crate::cli::{Cli, Command, ConvertArgs, PlistCommand, ShowArgs};
use crate::config::{self, CrippyConfig};

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.file.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Mkdir { path, mode } => {
            let mode = match mode {
                Some(raw) => config::parse_mode(&raw)?,
                None => config.dir_mode()?,
            };
            crippy::mkdir_with_parents(&path, mode)?;
            info!("ensured {} (mode {:o})", path, mode);
            Ok(())
        }
        Command::Join { segments } => {
            let joined =
                crippy::build_path(&segments).ok_or_else(|| anyhow!("no path segments given"))?;
            writeln!(out, "{joined}")?;
            Ok(())
        }
        Command::Hexdump { path } => {
            let data = crippy::file_read(&path)?;
            crippy::hexdump(&data);
            Ok(())
        }
        Command::Size { bytes } => {
            writeln!(out, "{}", crippy::format_size_for_display(bytes))?;
            Ok(())
        }
        Command::Upper { text } => {
            writeln!(out, "{}", crippy::str_toupper(&text))?;
            Ok(())
        }
        Command::Prot { bits } => {
            let bits = parse_u32(&bits)?;
            writeln!(out, "{}", crippy::prot2str(bits))?;
            Ok(())
        }
        Command::CheckAscii { text } => {
            if !crippy::check_ascii_string(text.as_bytes()) {
                bail!("string contains NUL or non-ASCII bytes");
            }
            writeln!(out, "ok")?;
            Ok(())
        }
        Command::CheckPointer { value } => {
            let pointer = parse_u32(&value)?;
            if !crippy::check_ascii_pointer(pointer) {
                bail!("0x{pointer:08x} is not ASCII-safe");
            }
            writeln!(out, "ok")?;
            Ok(())
        }
        Command::Plist { command } => match command {
            PlistCommand::Show(args) => handle_plist_show(&mut out, args),
            PlistCommand::Convert(args) => handle_plist_convert(&config, args),
        },
    }
}

fn load_config(explicit: Option<&Utf8PathBuf>) -> Result<CrippyConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path);
            }
            path.clone()
        }
        None => config::default_path()?,
    };
    debug!(%path, "loading config");
    config::load(&path)
}

fn handle_plist_show<W: Write>(out: &mut W, args: ShowArgs) -> Result<()> {
    let raw = crippy::file_read(&args.path)?;
    let format = PlistFormat::sniff(&raw);
    let value = crippy::decode_plist(&raw).with_context(|| format!("parsing plist {}", args.path))?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&value).context("rendering plist as JSON")?;
        writeln!(out, "{rendered}")?;
    } else {
        writeln!(out, "{}: {} plist", args.path, format)?;
        writeln!(out, "{value:#?}")?;
    }
    Ok(())
}

fn handle_plist_convert(config: &CrippyConfig, args: ConvertArgs) -> Result<()> {
    let format = args.format.unwrap_or_else(|| config.plist_format());
    let progress = |pct: f64| crippy::print_progress_real(pct, true);

    progress(0.0);
    let value = crippy::plist_read(&args.input)?;
    progress(50.0);
    crippy::plist_write(&args.output, &value, format)?;
    progress(100.0);

    debug!(input = %args.input, output = %args.output, %format, "converted plist");
    Ok(())
}

/// Accept `0x`-prefixed hex, `0`-prefixed octal or plain decimal.
fn parse_u32(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else if trimmed.len() > 1 && trimmed.starts_with('0') {
        u32::from_str_radix(&trimmed[1..], 8)
    } else {
        trimmed.parse()
    };
    parsed.with_context(|| format!("invalid number `{raw}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_u32_accepts_hex_octal_and_decimal() {
        assert_eq!(parse_u32("0x41414141").unwrap(), 0x4141_4141);
        assert_eq!(parse_u32("0755").unwrap(), 0o755);
        assert_eq!(parse_u32("7").unwrap(), 7);
        assert_eq!(parse_u32("0").unwrap(), 0);
        assert!(parse_u32("0xZZ").is_err());
        assert!(parse_u32("0x1_0000_0000").is_err());
    }

    #[test]
    fn show_reports_detected_format() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("info.plist")).unwrap();
        let value = plist::Value::Array(vec![plist::Value::String("iBoot".to_owned())]);
        crippy::plist_write(&path, &value, PlistFormat::Binary).unwrap();

        let mut out = Vec::new();
        handle_plist_show(&mut out, ShowArgs { path: path.clone(), json: false }).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&format!("{path}: binary plist")));
        assert!(text.contains("iBoot"));

        let mut out = Vec::new();
        handle_plist_show(&mut out, ShowArgs { path, json: true }).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json, serde_json::json!(["iBoot"]));
    }

    #[test]
    fn convert_uses_config_format_by_default() {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let input = root.join("in.plist");
        let output = root.join("out.plist");
        let value = plist::Value::Boolean(true);
        crippy::plist_write(&input, &value, PlistFormat::Xml).unwrap();

        let config = config::parse("plist_format = 'binary'\n").unwrap();
        handle_plist_convert(
            &config,
            ConvertArgs {
                input,
                output: output.clone(),
                format: None,
            },
        )
        .unwrap();

        let raw = std::fs::read(&output).unwrap();
        assert_eq!(PlistFormat::sniff(&raw), PlistFormat::Binary);
        assert_eq!(crippy::plist_read(&output).unwrap(), value);
    }
}
