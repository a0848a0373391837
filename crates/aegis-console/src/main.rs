//! AEGIS.AI — neural governance console

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aegis", about = "AEGIS.AI — neural governance console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive console (the default)
    Console {
        /// Config file (default: .aegis/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the default configuration as TOML
    Config,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", aegis_core::ConsoleConfig::default().to_toml());
        }
        Some(Commands::Version) => {
            println!("aegis v{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Console { config }) => run(config).await?,
        None => run(None).await?,
    }

    Ok(())
}

async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // The console owns stdout, so tracing goes to a rolling file instead.
    let log_dir = PathBuf::from(".aegis/logs");
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(&log_dir, "aegis.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aegis=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    let path = config_path.unwrap_or_else(|| PathBuf::from(".aegis/config.toml"));
    let config = aegis_core::ConsoleConfig::load(&path);
    aegis_console::run_console(config).await
}
