mod config;
mod runner;
mod state;
mod text_view;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, MemoryContentProvider};
use common::games::SessionRng;
use common::games::snake::{SessionController, Settings};
use common::logger::{self, LogLevel};
use common::log;
use tokio::sync::mpsc;

use config::get_settings_store;
use runner::{run_session, spawn_input_thread};

#[derive(Parser)]
#[command(name = "snake_xenzia")]
struct Args {
    /// Settings file, defaults to one next to the executable
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// Keep settings and high score in memory only
    #[arg(long)]
    no_persist: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Also log per-tick events
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    spawn_input_thread(command_tx);

    if args.no_persist {
        let store: ConfigManager<MemoryContentProvider, Settings> = ConfigManager::in_memory();
        run_session(SessionController::new(store, rng), command_rx).await;
    } else {
        let store = get_settings_store(args.settings);
        run_session(SessionController::new(store, rng), command_rx).await;
    }

    Ok(())
}
