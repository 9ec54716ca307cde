use cgrid::GenerationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Generation error; {0}")]
    Generation(#[from] GenerationError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error; {0}")]
    SettingsParse(#[from] ron::error::SpannedError),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("No config directory found on this system")]
    NoConfigDir,
}
