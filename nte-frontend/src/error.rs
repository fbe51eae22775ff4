use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File operation failed: {0}")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("File {} is not valid UTF-8", .0.display())]
    InvalidFileContent(PathBuf),
    #[error("Saving {} failed: {source}", .path.display())]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Reading terminal event failed: {0}")]
    TerminalEventFailed(std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
    #[error("Terminal operation failed: {0}")]
    TerminalOperationFailed(std::io::Error),
}
