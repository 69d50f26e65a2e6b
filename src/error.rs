use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that stop the game before or while it runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(
        "terminal is {width}x{height} but the board needs at least \
         {required_width}x{required_height}"
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        required_width: u16,
        required_height: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn too_small_message_names_both_sizes() {
        let error = AppError::TerminalTooSmall {
            width: 80,
            height: 24,
            required_width: 56,
            required_height: 30,
        };

        assert_eq!(
            error.to_string(),
            "terminal is 80x24 but the board needs at least 56x30"
        );
    }
}
