//! File logging. The terminal is owned by the UI, so logs go to disk.

use std::{error::Error, fs, sync::Mutex};

use tracing_subscriber::filter::LevelFilter;

const LOG_FILE: &str = "neura.log";

/// Install the global subscriber writing to `<data_dir>/neura.log`.
///
/// Logging stays off if the file cannot be created.
pub fn init(level: &str) {
    let Some(dirs) = neura_config::project_dirs() else {
        return;
    };
    let dir = dirs.data_dir();
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = fs::File::create(dir.join(LOG_FILE)) else {
        return;
    };
    if let Err(err) = install(level, file) {
        // Only one global subscriber can exist; keep the one already set.
        eprintln!("neura: logging not installed: {err}");
    }
}

fn install(level: &str, file: fs::File) -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(parse_level(level))
        .with_writer(Mutex::new(file))
        .try_init()
}

/// Parse a level name, falling back to `info`.
fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}
