use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitterError {
    /// The localization resource could not be opened or read.
    #[error("cannot read localization resource {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to load UI messages: {0}")]
    Localization(String),
}
