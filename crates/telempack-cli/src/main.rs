use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TELEMPACK_BUILD_COMMIT"),
    " ",
    env!("TELEMPACK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "telempack")]
#[command(version = VERSION)]
#[command(
    about = "Ground-side decoder for fixed-layout LoRa telemetry packets.",
    long_about = None,
    after_help = "Examples:\n  telempack packet decode packet.bin -o report.json\n  telempack packet decode packet.bin --stdout --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on raw packet files.
    Packet {
        #[command(subcommand)]
        command: PacketCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PacketCommands {
    /// Decode one packet file and generate a versioned JSON report.
    #[command(
        after_help = "Examples:\n  telempack packet decode packet.bin -o report.json\n  telempack packet decode packet.bin --stdout"
    )]
    Decode {
        /// Path to a raw packet file (one 14-byte record)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Packet { command } => match command {
            PacketCommands::Decode {
                input,
                report,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_packet_decode(input, report, stdout, pretty, compact, quiet),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_packet_decode(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;

    let report = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a raw packet file".to_string()),
        ));
    }

    let mut rep = match telempack_core::decode_packet_file(&resolved_input) {
        Ok(rep) => rep,
        Err(telempack_core::DecodeError::Format(err)) => {
            return Err(CliError::new(
                format!("{}: {}", resolved_input.display(), err),
                Some(format!(
                    "expected exactly {} bytes of packet data",
                    telempack_core::PACKET_LEN
                )),
            ));
        }
        Err(err) => {
            return Err(CliError::new(
                format!("failed to decode {}: {}", resolved_input.display(), err),
                None,
            ));
        }
    };
    rep.generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| telempack_core::DEFAULT_GENERATED_AT.to_string());

    let json = serialize_report(&rep, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let report = report.expect("report required when not using stdout");
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn serialize_report(
    rep: &telempack_core::Report,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a raw packet file".to_string()),
        ));
    }
    Ok(())
}

/// Expand a glob input to exactly one packet file.
///
/// A packet file holds a single record, so a pattern matching several files
/// is an error rather than a batch.
fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !pattern.contains(['*', '?', '[']) {
        return Ok(input.clone());
    }

    let entries = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{pattern}'"),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| {
            CliError::new(format!("cannot expand pattern '{pattern}': {err}"), None)
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.len() > 1 {
        return Err(CliError::new(
            format!(
                "pattern '{pattern}' matches {} files; a packet file holds a single record",
                files.len()
            ),
            Some("narrow the pattern to one file".to_string()),
        ));
    }
    files.pop().ok_or_else(|| {
        CliError::new(
            format!("no file matches pattern '{pattern}'"),
            Some("check the path or quote the pattern".to_string()),
        )
    })
}
