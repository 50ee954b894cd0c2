mod app;
mod content;
mod form;
mod logging;
mod pages;

use neura_config::Config;
use tracing::warn;

use crate::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // A broken config file should never keep the site from opening.
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = load_error {
        warn!(%err, "could not load config, using defaults");
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}
