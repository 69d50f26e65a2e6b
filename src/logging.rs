use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "retro-snake";
const LOG_FILE_NAME: &str = "retro-snake.log";

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes the `log` facade into `path`, truncating any previous session.
///
/// The terminal is in raw mode while the game runs, so logs never go to
/// stdout or stderr.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let file = create_log_file(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    File::create(path)
}
