use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::Style;
use pricing_sync_core::{
    config::{DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT, OPENROUTER_MODELS_URL},
    sync_pricing, verify_artifact, ErrorKind, SyncConfig, SyncError, SyncOutcome,
};
use tracing_subscriber::EnvFilter;

// ── Palette ──────────────────────────────────────────────────────────

fn s_err() -> Style  { Style::new().for_stderr().color256(167) }  // red
fn s_warn() -> Style { Style::new().for_stderr().color256(214) }  // amber
fn s_ok() -> Style   { Style::new().color256(114) }               // green

// ── Exit codes ───────────────────────────────────────────────────────

// 2 is left to clap for usage errors.
const EXIT_EMPTY: u8 = 1;
const EXIT_FETCH: u8 = 3;
const EXIT_IO: u8 = 4;
const EXIT_VERIFY: u8 = 5;

// ── CLI Args ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "pricing-sync",
    about = "Fetch OpenRouter model pricing and write it as a JSON test fixture",
    version,
    after_help = "examples:\n  \
        pricing-sync                               (refresh the default fixture)\n  \
        pricing-sync --output /tmp/pricing.json\n  \
        pricing-sync verify                        (check the fixture is usable)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Model listing to fetch.
    #[arg(long, default_value = OPENROUTER_MODELS_URL)]
    endpoint: String,

    /// Pricing fixture to write (or check, with `verify`).
    #[arg(long, short, global = true, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Request timeout in seconds.
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Log request and write details to stderr.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an existing pricing fixture is a non-empty array of objects.
    Verify,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", s_err().apply_to(format!("error: {err:#}")));
            exit_code_for(&err)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Some(Commands::Verify) => cmd_verify(&cli.output),
        None => {
            let config = SyncConfig::default()
                .with_endpoint(cli.endpoint)
                .with_output_path(cli.output)
                .with_timeout(Duration::from_secs(cli.timeout));
            cmd_sync(&config).await
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let code = match err.downcast_ref::<SyncError>().map(SyncError::kind) {
        Some(ErrorKind::Fetch) => EXIT_FETCH,
        Some(ErrorKind::Io) => EXIT_IO,
        Some(ErrorKind::Verify) => EXIT_VERIFY,
        None => 1,
    };
    ExitCode::from(code)
}

// ── Sync ─────────────────────────────────────────────────────────────

async fn cmd_sync(config: &SyncConfig) -> anyhow::Result<ExitCode> {
    match sync_pricing(config).await? {
        SyncOutcome::Written(summary) => {
            println!("{summary}");
            Ok(ExitCode::SUCCESS)
        }
        SyncOutcome::Empty => {
            eprintln!(
                "{}",
                s_warn().apply_to(format!(
                    "No pricing data fetched from {}; leaving {} untouched",
                    config.endpoint,
                    config.output_path.display()
                ))
            );
            Ok(ExitCode::from(EXIT_EMPTY))
        }
    }
}

// ── Verify ───────────────────────────────────────────────────────────

fn cmd_verify(path: &std::path::Path) -> anyhow::Result<ExitCode> {
    let status = verify_artifact(path)?;
    println!(
        "{}",
        s_ok().apply_to(format!(
            "\u{2714} {} ({} pricing entries)",
            status.path.display(),
            status.entries
        ))
    );
    Ok(ExitCode::SUCCESS)
}
