use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which input file could not be located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Dictionary,
    Board,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Dictionary => write!(f, "dictionary"),
            Self::Board => write!(f, "board"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BoggleError {
    #[error("board must reduce to exactly 16 letters a-z, got {found:?}")]
    InvalidBoard { found: String },
    #[error("{kind} file not found: {}", path.display())]
    MissingResource { kind: ResourceKind, path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to build dictionary index: {0}")]
    Index(#[from] fst::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoggleError>;
