//! Legal research dashboard - Entry Point

use clap::Parser;
use lexdash::source::DataSource;
use lexdash::state::AppState;
use lexdash::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Legal research dashboard - cases, precedents and profile in the terminal
#[derive(Parser, Debug)]
#[command(name = "lexdash")]
#[command(version)]
#[command(about = "Terminal dashboard for legal case and precedent research")]
pub struct Args {
    /// Page to open first
    #[arg(short, long, value_parser = ["dashboard", "cases", "precedents", "profile"])]
    pub page: Option<String>,

    /// Start with this search query on the first page (list pages only)
    #[arg(short, long)]
    pub search: Option<String>,

    /// JSON data set to load instead of the built-in records
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Caption typing speed in milliseconds per character (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub caption_speed: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = lexdash::config::load_config_with_precedence(args.config.clone())?;
        let merged = lexdash::config::merge_config(config_file);
        let with_env = lexdash::config::apply_env_overrides(merged);

        lexdash::config::apply_cli_overrides(
            with_env,
            args.page.clone(),
            args.data.clone(),
            args.caption_speed,
        )
    };

    lexdash::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let options = config.app_options(args.search.clone())?;
    let data = DataSource::from_path(config.data_file.clone()).load()?;
    let app_state = AppState::new(data, options)?;

    let colors = ColorConfig::from_env_and_args(args.no_color);
    lexdash::view::run_app(app_state, colors)?;

    Ok(())
}
