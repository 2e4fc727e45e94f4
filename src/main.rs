//! Replays a binomial heap command stream.
//!
//! Reads `n q` followed by `q` commands from a file or stdin and prints one
//! line per get-min command. Logs go to stderr.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use binomial_forest::command::Script;
use clap::Parser;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "binomial-forest")]
#[command(about = "Replay a command stream against a collection of binomial heaps")]
struct Args {
    /// Command stream to read; stdin when omitted
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let script: Script = input.parse().context("malformed command stream")?;
    info!(
        heaps = script.heap_count,
        commands = script.commands.len(),
        "replaying script"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let heaps = script.run(&mut out).context("replay failed")?;
    out.flush().context("failed to flush stdout")?;

    info!(live = heaps.total_len(), "replay finished");
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("binomial_forest=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
