use thiserror::Error;

use crate::geometry::{MAX_THEME_LENGTH, MIN_THEME_LENGTH};

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ThemeError {
    #[error(
        "Found word \"{word}\" with invalid length {length}. Theme entries must be {min} to {max} letters long; \
         words shorter than {min} can never leave enough space for blanks in between.",
        min = MIN_THEME_LENGTH,
        max = MAX_THEME_LENGTH
    )]
    Length { word: String, length: usize },
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid word list line {line}: {content}")]
    Format { line: usize, content: String },

    #[error("Expected a JSON array of words or an object of word scores, found {0}")]
    JsonShape(String),

    #[error("Unknown tier \"{0}\", expected one of fair, good, great, best")]
    UnknownTier(String),
}
