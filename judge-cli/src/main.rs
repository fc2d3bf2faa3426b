//! Local developer harness for the execution core.
//!
//! Runs one submission exactly as the service would and prints the JSON
//! response. This is not the production invocation transport, which lives
//! outside this repository.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use judge_sandbox::{Executor, RunRequest};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "judge")]
#[command(about = "Run a code submission through the execution core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a submission and print the JSON response
    Run {
        /// Guest language (python, cpp)
        #[arg(short, long)]
        language: String,

        /// Path to the source file; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            language,
            file,
            verbose,
        } => {
            init_tracing(verbose);

            let code = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("reading source from stdin")?;
                    buffer
                }
            };

            let report = Executor::new()
                .run(RunRequest::new(language, code))
                .await
                .context("executing submission")?;

            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}
