//! Confedit main entry point

use clap::Parser;
use confedit_api::start_server;
use confedit_config::Config;
use confedit_store::DocumentStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "confedit")]
#[command(author = "Confedit Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A local configuration-editing web server", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "confedit.yaml")]
    config: PathBuf,
}

/// Set up the two log sinks: a colored console layer and a plain-text
/// dated file under the configured log directory. The file is appended
/// to for the process lifetime.
fn init_logging(config: &Config) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(&config.logging.dir)?;

    let file_name = format!("editor-server-{}.log", chrono::Local::now().format("%Y%m%d"));
    let log_path = config.logging.dir.join(file_name);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(true))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    Ok(log_path)
}

fn print_banner(config: &Config, log_path: &Path) {
    println!();
    println!("╔{}╗", "═".repeat(58));
    println!("║{:^58}║", "confedit");
    println!("║{:^58}║", "content editor server");
    println!("╚{}╝", "═".repeat(58));
    println!();
    println!("  server:    http://{}", config.listen_addr());
    println!("  document:  {}", config.storage.document.display());
    println!("  log file:  {}", log_path.display());
    println!();
    println!("  GET  /              editor page");
    println!("  GET  /api/config    read configuration");
    println!("  POST /api/config    save configuration");
    println!();
    println!("  press Ctrl+C to stop");
    println!();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.clone())?;
    let log_path = init_logging(&config)?;
    print_banner(&config, &log_path);

    tracing::info!("log file: {}", log_path.display());

    let store = Arc::new(DocumentStore::new(config.storage.document.clone()));

    let rt = Runtime::new()?;
    rt.block_on(async {
        start_server(config, store).await;
    });

    Ok(())
}
