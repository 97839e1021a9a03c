// crates/tb_cli/src/main.rs
//
// Offline bracket CLI: load request → apply overrides → pipeline → canonical
// bytes → stdout or atomic file. The `BR:<hex>` fingerprint goes to stderr.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::io::Write;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};
use tb_core::entities::BracketInput;
use tb_core::variables::{DuplicateOutcomePolicy, SeedingMethod};
use tb_io::canonical_json::{to_canonical_bytes, write_bytes_atomic};
use tb_io::hasher::bracket_id_from_bytes;
use tb_io::loader;
use tracing_subscriber::EnvFilter;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Request shape, JSON, or bracket validation failures
    Validation(String),
    /// Read/write/path/limit errors
    Io(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "{m}"),
            MainError::Io(m) => write!(f, "{m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("tb: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    init_logging(args.quiet);

    let result = if args.validate_only { validate_only(&args) } else { run_once(&args) };
    let rc = match result {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("tb: error: {e}");
            map_error(&e)
        }
    };

    ExitCode::from(rc as u8)
}

/// Stderr subscriber. `RUST_LOG` wins; otherwise warnings only (errors with --quiet).
fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the request and fold in command-line overrides.
fn load(args: &Args) -> Result<BracketInput, MainError> {
    let mut input = loader::load_input(&args.input).map_err(map_io_err)?;
    if let Some(seed) = args.seed {
        input.random_seed = Some(seed);
    }
    if let Some(method) = args.seeding {
        input.seeding_method = method;
    }
    if args.last_wins {
        input.duplicate_outcome_policy = DuplicateOutcomePolicy::LastWins;
    }
    tracing::debug!(
        path = %args.input.display(),
        participants = input.participants.len(),
        results = input.results.len(),
        random = input.seeding_method == SeedingMethod::Random,
        "request loaded"
    );
    Ok(input)
}

/// Validate-only path (no bracket, no output).
fn validate_only(args: &Args) -> Result<(), MainError> {
    let input = load(args)?;
    let v = tb_pipeline::validate(&input).map_err(|e| MainError::Validation(e.to_string()))?;
    if !args.quiet {
        eprintln!("validate-only: {} participants, {}-slot bracket", v.count, v.slots);
    }
    Ok(())
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let input = load(args)?;

    let mut rng = tb_pipeline::request_rng(&input);
    let (bracket, report) = tb_pipeline::generate_bracket_report(&input, &mut rng)
        .map_err(|e| MainError::Validation(e.to_string()))?;

    let bytes = to_canonical_bytes(&bracket).map_err(map_io_err)?;
    let id = bracket_id_from_bytes(&bytes);

    match &args.out {
        Some(path) => {
            write_bytes_atomic(path, &bytes).map_err(map_io_err)?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "bracket written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|()| stdout.flush())
                .map_err(|e| MainError::Io(format!("stdout: {e}")))?;
        }
    }

    if args.report {
        let json = serde_json::to_string(&report).map_err(|e| MainError::Io(format!("report: {e}")))?;
        eprintln!("{json}");
    } else if !report.is_clean() {
        tracing::warn!(issues = report.issues.len(), "some outcome records did not bind (see --report)");
    }
    if !args.quiet {
        eprintln!("{id}");
    }
    Ok(())
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

/// Translate tb_io::IoError into MainError buckets for exit-code mapping.
fn map_io_err(e: tb_io::IoError) -> MainError {
    use tb_io::IoError::*;
    match e {
        Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        Invalid(m) => MainError::Validation(format!("invalid: {m}")),
        Path(m) => MainError::Io(format!("path: {m}")),
        Limit(m) => MainError::Io(format!("limit: {m}")),
    }
}
