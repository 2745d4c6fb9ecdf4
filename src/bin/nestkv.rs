//! NestKV Shell Binary
//!
//! Interactive prompt, or batch mode with `--file`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use nestkv::{BackendKind, Config, Registry, Shell};
use tracing_subscriber::{fmt, EnvFilter};

/// NestKV Shell
#[derive(Parser, Debug)]
#[command(name = "nestkv")]
#[command(about = "Hierarchical in-memory key-value store shell")]
#[command(version)]
struct Args {
    /// Run this script and exit instead of starting a prompt
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Backend for collections created without one (avl or map)
    #[arg(short, long, default_value = "avl")]
    backend: String,

    /// Abort a script on its first failing command
    #[arg(long)]
    stop_on_error: bool,

    /// Interactive prompt
    #[arg(short, long, default_value = "nestkv> ")]
    prompt: String,
}

fn main() {
    // Initialize tracing/logging (stderr, so stdout carries only replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,nestkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("NestKV v{}", nestkv::VERSION);

    // Build config from args
    let config = Config::builder()
        .default_backend(BackendKind::from_name(&args.backend))
        .prompt(args.prompt)
        .stop_on_error(args.stop_on_error)
        .build();

    let registry = Arc::new(Registry::new());
    let mut shell = Shell::new(config, registry, io::stdout().lock());

    let result = match &args.file {
        Some(path) => shell.run_script(path).map(|summary| {
            tracing::info!(
                executed = summary.executed,
                failed = summary.failed,
                "Script finished"
            );
        }),
        None => shell.run_interactive(io::stdin().lock()),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
