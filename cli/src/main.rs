//! statusboard CLI - static status page builder
//!
//! # Commands
//! - `statusboard build` - 정적 Status Page 생성
//! - `statusboard watch` - interval마다 Status Page 재생성
//! - `statusboard sample-config` - 샘플 카탈로그를 TOML 설정으로 출력

mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Static status page builder
#[derive(Parser)]
#[command(name = "statusboard")]
#[command(author, version, about = "Build static status pages from service snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the status page once
    Build {
        /// Site config file (default: built-in sample catalog)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Seed for reproducible uptime history (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Regenerate the status page on an interval until Ctrl-C
    Watch {
        /// Site config file (default: built-in sample catalog)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Refresh interval in seconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Print the sample catalog as a TOML config
    SampleConfig {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,statusboard_page=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config, out, seed } => {
            status::run_status_build(config.as_deref(), out, seed)
        }
        Commands::Watch {
            config,
            out,
            interval,
        } => status::run_status_watch(config.as_deref(), out, interval).await,
        Commands::SampleConfig { output } => status::run_sample_config(output.as_deref()),
    }
}
