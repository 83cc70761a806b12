use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to spawn parser '{parser}': {source}")]
    Spawn {
        parser: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write panel {path}: {source}")]
    PanelWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No viewer registered for file: {0}")]
    UnsupportedFile(String),
}
