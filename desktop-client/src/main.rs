mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tictactoe_common::games::tictactoe::TicTacToeSession;
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Path to the YAML config. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
    /// Fixed seed for the computer's random choices.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;

    let mut settings = config.game.session_settings();
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let session = TicTacToeSession::new(settings, runtime.handle().clone());

    log!(
        "Starting Tic-Tac-Toe on {} difficulty",
        session.difficulty()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TicTacToeApp::new(
                cc,
                session,
                config_manager,
                runtime,
            )))
        }),
    )?;

    Ok(())
}
