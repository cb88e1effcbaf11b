use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use crippy::PlistFormat;

/// Command line front end for the crippy helpers.
#[derive(Parser, Debug)]
#[command(name = "crippy", version, about = "Firmware tooling helpers")]
pub struct Cli {
    /// Config file to use instead of `~/.crippy/config.toml`.
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<Utf8PathBuf>,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a directory and any missing parents.
    Mkdir {
        path: Utf8PathBuf,
        /// Octal permission bits, e.g. 755.
        #[arg(short = 'm', long = "mode")]
        mode: Option<String>,
    },
    /// Join path segments with `/`.
    Join {
        #[arg(required = true)]
        segments: Vec<String>,
    },
    /// Hex dump a file to stderr.
    Hexdump { path: Utf8PathBuf },
    /// Format a byte count for display.
    Size { bytes: u64 },
    /// Upper-case a string.
    Upper { text: String },
    /// Render protection bits as `rwx` letters.
    Prot { bits: String },
    /// Check that a string is free of NUL and high-bit bytes.
    CheckAscii { text: String },
    /// Check that a 32-bit word is made of four ASCII-safe bytes.
    CheckPointer { value: String },
    /// Inspect and convert property lists.
    Plist {
        #[command(subcommand)]
        command: PlistCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlistCommand {
    /// Print the detected encoding and contents of a plist.
    Show(ShowArgs),
    /// Re-encode a plist as XML or binary.
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub path: Utf8PathBuf,
    /// Print the document as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
    /// Output encoding: `xml` or `binary`.
    #[arg(long)]
    pub format: Option<PlistFormat>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plist_convert_with_format() {
        let cli = Cli::try_parse_from([
            "crippy", "-v", "plist", "convert", "in.plist", "out.plist", "--format", "binary",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Command::Plist {
            command: PlistCommand::Convert(args),
        } = cli.command
        else {
            panic!("expected plist convert");
        };
        assert_eq!(args.format, Some(PlistFormat::Binary));
        assert_eq!(args.output, "out.plist");
    }

    #[test]
    fn join_requires_a_segment() {
        assert!(Cli::try_parse_from(["crippy", "join"]).is_err());
        let cli = Cli::try_parse_from(["crippy", "join", "a", "b/"]).unwrap();
        let Command::Join { segments } = cli.command else {
            panic!("expected join");
        };
        assert_eq!(segments, ["a", "b/"]);
    }

    #[test]
    fn plist_format_parses_through_from_str() {
        for (raw, expected) in [
            ("xml", PlistFormat::Xml),
            ("XML", PlistFormat::Xml),
            ("bin", PlistFormat::Binary),
        ] {
            let cli =
                Cli::try_parse_from(["crippy", "plist", "convert", "a", "b", "--format", raw])
                    .unwrap();
            let Command::Plist {
                command: PlistCommand::Convert(args),
            } = cli.command
            else {
                panic!("expected plist convert");
            };
            assert_eq!(args.format, Some(expected), "{raw}");
        }
    }

    #[test]
    fn rejects_unknown_plist_format() {
        assert!(
            Cli::try_parse_from(["crippy", "plist", "convert", "a", "b", "--format", "json"])
                .is_err()
        );
    }
}
