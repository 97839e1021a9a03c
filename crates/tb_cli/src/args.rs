// crates/tb_cli/src/args.rs
//
// Offline CLI argument surface.
//
// - No networked paths (reject any scheme:// like http/https/file)
// - --input is the bracket request JSON; --out is an optional output file
// - Seed override accepts u64 decimal or 0x-hex up to 16 nybbles
// - --validate-only checks the request without building the bracket

use std::path::{Path, PathBuf};

use clap::Parser;
use tb_core::variables::SeedingMethod;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tb",
    disable_help_subcommand = true,
    about = "Offline, deterministic single-elimination bracket generator"
)]
pub struct Args {
    /// Bracket request JSON path.
    #[arg(long)]
    pub input: PathBuf,

    /// Write canonical bracket JSON here (atomically). Defaults to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Random seeding seed override. Accepts decimal u64 or 0x-hex (≤16 hex digits).
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Seeding policy override: seeded | random.
    #[arg(long, value_parser = parse_seeding)]
    pub seeding: Option<SeedingMethod>,

    /// Resolve duplicate outcome records by the last one listed.
    #[arg(long)]
    pub last_wins: bool,

    /// Print the outcome binding report (JSON) to stderr.
    #[arg(long)]
    pub report: bool,

    /// Validate the request only; do not build the bracket.
    #[arg(long)]
    pub validate_only: bool,

    /// Suppress non-essential stderr output.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

/// Post-parse checks shared by `main` and tests.
pub fn validate(args: Args) -> Result<Args, CliError> {
    ensure_local_path(&args.input)?;
    if let Some(out) = &args.out {
        ensure_local_path(out)?;
    }
    Ok(args)
}

/// Seed parser: decimal u64 or 0x-hex (1..=16 nybbles).
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>().map_err(|_| "decimal seed must be a valid u64".into())
    }
}

fn parse_seeding(s: &str) -> Result<SeedingMethod, String> {
    s.trim().parse::<SeedingMethod>().map_err(|e| e.to_string())
}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

/// Ensure a provided path string is local (no scheme); existence is checked by the loader.
#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}
