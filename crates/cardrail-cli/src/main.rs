//! cardrail - a snap-aligned card carousel for the terminal
//!
//! Lays a row of cards out in a horizontally scrolling strip with:
//! - navigation dots that track which cards are in view
//! - edge shadows hinting at cards hidden past either side
//! - smooth keyboard/dot navigation and wheel scrolling with snapping

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cardrail_core::constants::paths;
use cardrail_core::Config;

mod inspect;
mod tui;

/// cardrail - card carousel
#[derive(Parser)]
#[command(name = "cardrail")]
#[command(about = "A snap-aligned card carousel for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme name, overrides the config file
    #[arg(short, long)]
    theme: Option<String>,

    /// Card width in cells, overrides the config file
    #[arg(long)]
    card_width: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes
    Themes,

    /// Print the effective configuration as TOML
    Config,

    /// Report what the carousel shows at a given viewport width
    Inspect {
        /// Viewport width in cells
        #[arg(long)]
        viewport: u16,

        /// Scroll offset in cells
        #[arg(long)]
        offset: Option<f64>,

        /// Navigate to this card (0-based) and wait for it to settle
        #[arg(long)]
        item: Option<usize>,
    },
}

/// Load the config file and apply command line overrides
fn load_config(path: Option<&Path>, card_width: Option<u16>) -> Result<Config> {
    let mut config = Config::load(path).context("failed to load configuration")?;
    if let Some(width) = card_width {
        config.layout.card_width = width;
        config
            .validate()
            .context("invalid --card-width for this configuration")?;
    }
    Ok(config)
}

fn init_logging() {
    // Log to a file, never stdout/stderr which would mess up the TUI
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(paths::APP_DIR_NAME)
        .join("logs");
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join(paths::LOG_FILE_NAME))
        .or_else(|_| std::fs::File::create(null_device))
    {
        Ok(file) => file,
        // Nowhere to write; run without logging
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tui::restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.card_width)?;

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml_string()?);
        }
        Some(Commands::Inspect {
            viewport,
            offset,
            item,
        }) => {
            let request = inspect::InspectRequest {
                viewport,
                offset,
                item,
            };
            let report = inspect::inspect(&config, &request)?;
            println!("{}", report);
        }
        None => {
            tracing::info!("Starting cardrail TUI");
            let mut app = tui::App::new(config, cli.theme.as_deref());
            app.run().await?;
        }
    }

    Ok(())
}
