use std::io;

use thiserror::Error;

/// startup failure taxonomy; Config and Listen are always fatal,
/// Remote is fatal only where the caller chooses to treat it so
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("config load error: {0}")]
    Config(String),
    #[error("remote api error: {0}")]
    Remote(String),
    #[error("listen error: {0}")]
    Listen(io::Error),
}
