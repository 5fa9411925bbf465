use std::path::PathBuf;

use thiserror::Error;

use crate::radix::DecodeError;
use crate::ShareIndex;

#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("Cannot read share document {path}: {source}")]
    DocumentLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed share document: {0}")]
    DocumentParse(#[from] serde_json::Error),
    #[error("Invalid parameters: n = {share_count}, k = {threshold}")]
    InvalidParameters { share_count: i64, threshold: i64 },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Malformed share entry: {0}")]
    MalformedEntry(String),
    #[error("Insufficient points for reconstruction. Need {required}, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },
    #[error("Duplicate x-coordinate found: {0}")]
    DuplicateCoordinate(ShareIndex),
}
