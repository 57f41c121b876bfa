use thiserror::Error;

use crate::compare::Mismatch;

pub type Result<T> = std::result::Result<T, TestingFilesError>;

#[derive(Error, Debug)]
pub enum TestingFilesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content mismatch: {0}")]
    Mismatch(Mismatch),
    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: u64, actual: u64 },
    #[error("Path error: {0}")]
    Path(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TestingFilesError {
    /// Content was read on both sides and differs
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }

    /// The check could not be carried out
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::Mismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }
}

impl From<Mismatch> for TestingFilesError {
    fn from(mismatch: Mismatch) -> Self {
        Self::Mismatch(mismatch)
    }
}

impl From<serde_json::Error> for TestingFilesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
