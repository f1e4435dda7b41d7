//! CLI tool to print the Collatz sequence for a start value.
//!
//! Usage:
//!   collatz <N> [--lenient] [--max-len M] [--config config.json] [--format text|json] [--stats] [--validate]
//!
//! Logging goes to stderr and is filtered by `COLLATZ_LOG` (e.g. `COLLATZ_LOG=debug`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use collatz::{verify, GeneratorConfig, NonPositivePolicy, SequenceGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Space-separated values on one line
    Text,
    /// JSON array
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "collatz",
    about = "Print the Collatz sequence for a start value",
    version
)]
struct Args {
    /// Start value
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Generator config file (JSON)
    #[arg(short, long, env = "COLLATZ_CONFIG")]
    config: Option<PathBuf>,

    /// Return [n] for n <= 0 instead of failing
    #[arg(long, default_value = "false")]
    lenient: bool,

    /// Fail if the sequence holds more than this many values
    #[arg(long)]
    max_len: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Re-check every step of the output
    #[arg(long, default_value = "false")]
    validate: bool,

    /// Print statistics about the sequence
    #[arg(long, default_value = "false")]
    stats: bool,
}

fn main() -> Result<()> {
    setup_logger();
    let args = Args::parse();

    // 1. Load config, then apply flag overrides
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            GeneratorConfig::from_json(&json).context("Failed to parse config file")?
        }
        None => GeneratorConfig::new(),
    };
    if args.lenient {
        config = config.with_policy(NonPositivePolicy::Terminate);
    }
    if let Some(max_len) = args.max_len {
        anyhow::ensure!(max_len > 0, "--max-len must be at least 1");
        config = config.with_max_len(max_len);
    }
    tracing::debug!(?config, "generator config");

    // 2. Generate
    let seq = SequenceGenerator::from_config(config)
        .generate(args.n)
        .with_context(|| format!("Failed to generate sequence for {}", args.n))?;

    // 3. Optional validation
    if args.validate {
        verify(seq.as_slice()).context("Validation failed")?;
        eprintln!("✓ Validation passed!");
    }

    // 4. Output
    match args.format {
        Format::Text => {
            let line = seq
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}", line);
        }
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string(&seq).context("Failed to serialize sequence")?
            );
        }
    }

    // 5. Optional stats
    if args.stats {
        eprintln!();
        eprintln!("Sequence statistics:");
        eprintln!("  Start:         {:>10}", seq.start());
        eprintln!("  Length:        {:>10}", seq.len());
        eprintln!("  Stopping time: {:>10}", seq.stopping_time());
        eprintln!("  Peak:          {:>10}", seq.peak());
    }

    Ok(())
}

fn setup_logger() {
    let env = tracing_subscriber::EnvFilter::from_env("COLLATZ_LOG");

    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::default())
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .with_env_filter(env)
        .init();
}
