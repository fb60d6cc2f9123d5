use std::path::{Path, PathBuf};

use clap::Parser;
use gpui::{App, Application};
use tip_core::CurrencyLocale;
use tracing::{debug, error, info};

use tip_ui::{
    config::{DEFAULT_CONFIG_FILE, TipConfig},
    logging, open_main_window, setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Opens a window that works out the tip on a bill as you type.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Config file. Defaults to `tip-time.toml` in the working directory,
    /// which may be absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Currency locale, e.g. `en-US` or `de_DE.UTF-8`.
    /// Defaults to the config file, then LC_ALL / LC_MONETARY / LANG.
    #[arg(long, value_parser = CurrencyLocale::from_tag)]
    locale: Option<CurrencyLocale>,

    /// Log filter, e.g. `debug` or `info,tip_core=trace`. RUST_LOG wins.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<TipConfig> {
    let config = match &cli.config {
        Some(path) => TipConfig::load(path)?,
        None => TipConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    Ok(config.with_overrides(cli.locale, cli.log_level.clone(), cli.log_file.clone()))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(level) = &config.log_level {
        if logging::env_filter_overridden() {
            debug!("RUST_LOG is set; ignoring configured log level");
        } else {
            logging::set_log_level(level)?;
        }
    }
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }

    info!(locale = %config.currency_locale(), "starting Tip Time");

    Application::new().run(move |cx: &mut App| {
        setup_app(cx);

        if let Err(error) = open_main_window(&config, cx) {
            error!(?error, "failed to open main window");
            cx.quit();
        }
    });

    Ok(())
}
