use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid letter: {0:?} (expected a single letter A-Z)")]
    InvalidLetter(String),
    #[error("invalid color: {0:?} (expected a color name or #rrggbb)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
