use std::path::PathBuf;

/// Everything that can go wrong while reading or rewriting the diary file.
#[derive(Debug, thiserror::Error)]
pub enum DiaryError {
    /// The store file could not be opened, created, written or renamed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The store file exists but is not a JSON array of entries.
    #[error("malformed diary file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode entries: {0}")]
    Encode(#[source] serde_json::Error),
    /// A required field was left empty.
    #[error("{0}")]
    Validation(&'static str),
}

impl DiaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiaryError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DiaryError::Validation(_))
    }
}

pub type Result<T, E = DiaryError> = std::result::Result<T, E>;
