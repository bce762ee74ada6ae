use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Per-station min/mean/max report over a `station;value` measurements file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Measurements file to aggregate
    file: PathBuf,
    /// Number of chunks to split the file into (and threads to run them)
    #[arg(long, default_value_t = num_cpus::get())]
    workers: usize,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries exactly the report line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = obrc::run(&args.file, args.workers.max(1))?;
    println!("{report}");
    Ok(())
}
