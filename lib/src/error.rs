use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("question collection not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed question collection {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error(
        "collection {} has only {available} valid questions, but {required} required",
        path.display()
    )]
    InsufficientQuestions {
        path: PathBuf,
        available: usize,
        required: usize,
    },

    #[error("no quiz variants were produced")]
    NoVariantsProduced,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
