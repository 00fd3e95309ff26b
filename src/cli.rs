// Command-line front end for lcsdelta.
//
// Two working commands (`diff`, `restore`) plus inspection helpers
// (`records`, `config`). Every command returns a process exit code.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use log::LevelFilter;

use crate::engine::{DiffOptions, RestoreOptions};
use crate::format::RecordReader;
use crate::io::{self, DiffStats, RestoreStats};
use crate::lcs::DEFAULT_MAX_TABLE_CELLS;

const PREVIEW_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Count parsing (supports K, M, G suffixes)
// ---------------------------------------------------------------------------

fn parse_count(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty count string".into());
    }
    let (num_part, multiplier) = match s.as_bytes().last() {
        Some(b'k' | b'K') => (&s[..s.len() - 1], 1024u64),
        Some(b'm' | b'M') => (&s[..s.len() - 1], 1024 * 1024),
        Some(b'g' | b'G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1u64),
    };
    let num: u64 = num_part
        .trim()
        .parse()
        .map_err(|e| format!("invalid count '{s}': {e}"))?;
    num.checked_mul(multiplier)
        .ok_or_else(|| format!("count overflow: '{s}'"))
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// LCS-based binary diff and restore.
#[derive(Parser, Debug)]
#[command(
    name = "lcsdelta",
    version,
    about = "LCS-based binary diff/restore",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compute the diff that turns OLD into NEW.
    Diff(DiffArgs),
    /// Rebuild NEW from OLD and a diff.
    Restore(RestoreArgs),
    /// Print the records of a diff file.
    Records(RecordsArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct DiffArgs {
    /// Old file.
    #[arg(value_hint = ValueHint::FilePath)]
    old: PathBuf,

    /// New file.
    #[arg(value_hint = ValueHint::FilePath)]
    new: PathBuf,

    /// Diff output file.
    #[arg(value_hint = ValueHint::FilePath)]
    diff: PathBuf,

    /// Maximum alignment table cells (supports K/M/G suffix).
    #[arg(long = "max-cells", value_parser = parse_count, default_value_t = DEFAULT_MAX_TABLE_CELLS)]
    max_cells: u64,
}

#[derive(Args, Debug)]
struct RestoreArgs {
    /// Old file.
    #[arg(value_hint = ValueHint::FilePath)]
    old: PathBuf,

    /// Diff file.
    #[arg(value_hint = ValueHint::FilePath)]
    diff: PathBuf,

    /// Restored output file.
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Do not copy old bytes after the last record.
    #[arg(long = "legacy-tail")]
    legacy_tail: bool,
}

#[derive(Args, Debug)]
struct RecordsArgs {
    /// Diff file.
    #[arg(value_hint = ValueHint::FilePath)]
    diff: PathBuf,
}

#[derive(Debug, Clone, Copy)]
struct Globals {
    force: bool,
    quiet: bool,
    verbose: u8,
    json_output: bool,
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("lcsdelta".to_string())
        .chain(args.iter().cloned())
        .collect();
    let _ = Cli::try_parse_from(argv);
}

fn check_output(path: &Path, g: Globals) -> bool {
    if path.exists() && !g.force {
        eprintln!(
            "lcsdelta: output file exists, use -f to overwrite: {}",
            path.display()
        );
        return false;
    }
    true
}

fn hex(digest: Option<[u8; 32]>) -> Option<String> {
    digest.map(|d| d.iter().map(|b| format!("{b:02x}")).collect())
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("lcsdelta version {version} (Rust)");

    let file_io = cfg!(feature = "file-io") as u8;
    let parallel = cfg!(feature = "parallel") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();

    eprintln!("FILE_IO={file_io}");
    eprintln!("PARALLEL={parallel}");
    eprintln!("DEFAULT_MAX_TABLE_CELLS={DEFAULT_MAX_TABLE_CELLS}");
    eprintln!("sizeof(usize)={ptr_size}");

    0
}

// ---------------------------------------------------------------------------
// Diff command
// ---------------------------------------------------------------------------

fn cmd_diff(args: &DiffArgs, g: Globals) -> i32 {
    if !check_output(&args.diff, g) {
        return 1;
    }

    let opts = DiffOptions {
        max_table_cells: args.max_cells,
    };
    let stats: DiffStats = match io::diff_file(&args.old, &args.new, &args.diff, &opts) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("lcsdelta: diff error: {e}");
            return 1;
        }
    };

    if g.verbose > 0 && !g.quiet {
        eprintln!(
            "lcsdelta: diff: old size: {}, new size: {}, common: {}, records: {}, diff size: {}",
            stats.old_size, stats.new_size, stats.common, stats.records, stats.diff_size
        );
    }

    if g.json_output {
        let json = serde_json::json!({
            "command": "diff",
            "old_size": stats.old_size,
            "new_size": stats.new_size,
            "diff_size": stats.diff_size,
            "common": stats.common,
            "records": stats.records,
            "old_sha256": hex(stats.old_sha256),
            "new_sha256": hex(stats.new_sha256),
        });
        match serde_json::to_string_pretty(&json) {
            Ok(s) => eprintln!("{s}"),
            Err(e) => {
                eprintln!("lcsdelta: json error: {e}");
                return 1;
            }
        }
    }

    0
}

// ---------------------------------------------------------------------------
// Restore command
// ---------------------------------------------------------------------------

fn cmd_restore(args: &RestoreArgs, g: Globals) -> i32 {
    if !check_output(&args.output, g) {
        return 1;
    }

    let opts = RestoreOptions {
        copy_tail: !args.legacy_tail,
    };
    let stats: RestoreStats = match io::restore_file(&args.old, &args.diff, &args.output, &opts)
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("lcsdelta: restore error: {e}");
            return 1;
        }
    };

    if g.verbose > 0 && !g.quiet {
        eprintln!(
            "lcsdelta: restore: old size: {}, diff size: {}, records: {}, output size: {}",
            stats.old_size, stats.diff_size, stats.records, stats.output_size
        );
    }

    if g.json_output {
        let json = serde_json::json!({
            "command": "restore",
            "old_size": stats.old_size,
            "diff_size": stats.diff_size,
            "output_size": stats.output_size,
            "records": stats.records,
            "output_sha256": hex(stats.output_sha256),
        });
        match serde_json::to_string_pretty(&json) {
            Ok(s) => eprintln!("{s}"),
            Err(e) => {
                eprintln!("lcsdelta: json error: {e}");
                return 1;
            }
        }
    }

    0
}

// ---------------------------------------------------------------------------
// Records command
// ---------------------------------------------------------------------------

fn preview(payload: &[u8]) -> String {
    let shown = &payload[..payload.len().min(PREVIEW_LEN)];
    let mut s: String = shown.escape_ascii().to_string();
    if payload.len() > PREVIEW_LEN {
        s.push_str("...");
    }
    s
}

fn cmd_records(args: &RecordsArgs) -> i32 {
    let file = match File::open(&args.diff) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("lcsdelta: {}: {e}", args.diff.display());
            return 1;
        }
    };

    println!("  Index      Anchor     Deleted    Inserted  Payload");
    let mut reader = RecordReader::new(BufReader::new(file));
    loop {
        let index = reader.records_read();
        match reader.next_record() {
            Ok(Some(r)) => println!(
                "{index:>7}  {:>10}  {:>10}  {:>10}  \"{}\"",
                r.anchor,
                r.deleted,
                r.inserted.len(),
                preview(&r.inserted)
            ),
            Ok(None) => break,
            Err(e) => {
                eprintln!("lcsdelta: {e}");
                return 1;
            }
        }
    }
    println!("records: {}", reader.records_read());

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn log_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

pub fn run() -> ! {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(log_level(cli.quiet, cli.verbose));
    }
    logger.format_timestamp(None).format_target(false).init();

    let g = Globals {
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose,
        json_output: cli.json_output,
    };

    let exit_code = match &cli.command {
        Cmd::Diff(args) => cmd_diff(args, g),
        Cmd::Restore(args) => cmd_restore(args, g),
        Cmd::Records(args) => cmd_records(args),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
