//! logsift - Entry Point

use clap::Parser;
use logsift::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
};
use logsift::model::AppError;
use logsift::source::detect_input_source;
use logsift::state::PageSize;
use logsift::view::{run_with_source, CliArgs, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// logsift - browse, filter and page through service logs in the terminal
#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(version)]
#[command(about = "Terminal viewer for pipe-delimited service logs")]
pub struct Args {
    /// Log endpoint URL (overrides config file and LOGSIFT_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Read a saved JSON response from disk instead of fetching
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Items per page: 5, 10, 25, 50 or 100
    #[arg(short = 'n', long)]
    pub page_size: Option<PageSize>,

    /// Start with search text applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file)?;
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(with_env, args.endpoint.clone(), args.page_size)
    };

    logsift::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = detect_input_source(args.file, &config.endpoint, &config.api_key_base64);

    let cli_args = CliArgs::new(
        config.items_per_page,
        args.search,
        ColorConfig::from_env_and_args(args.no_color),
    );

    run_with_source(input_source, cli_args)?;

    Ok(())
}
