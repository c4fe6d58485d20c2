use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::loader::LoadError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),

    #[error("{message} (at byte {offset})")]
    Json { offset: usize, message: String },

    #[error(transparent)]
    Yaml(#[from] LoadError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
