use std::fs::File;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use concerts::core::config::{self, ResolvedConfig};
use concerts::scrape::{HttpSource, RegexExtractor, load_catalog};
use concerts::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "concerts",
    version,
    about = "Browse the concert calendar by artist",
    long_about = "Fetches the concert calendar, then shows artists on the left and the \
                  selected artist's concerts on the right.\n\n\
                  Keys: arrows or j/k scroll, J/K or PgDn/PgUp page, q quits."
)]
struct Args {}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _args = Args::parse();

    // Config problems are not fatal: fall back to defaults and say so once the logger is up.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::ConcertsConfig::default(), Some(e)),
    };
    let config = config::resolve(&file_config);

    init_logging(&config);
    log::info!("concerts v{} starting up", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    let extractor = match RegexExtractor::new(config.extractor.clone()) {
        Ok(extractor) => extractor,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("concerts: {e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match HttpSource::new(config.url.clone(), config.timeout) {
        Ok(source) => load_catalog(&source, &extractor).await,
        Err(e) => Err(e),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Could not load the calendar: {}", e);
            eprintln!("concerts: could not load the calendar from {}: {e}", config.url);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = tui::run(catalog, &config) {
        log::error!("Terminal error: {}", e);
        eprintln!("concerts: terminal error: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("Exiting");
    ExitCode::SUCCESS
}
