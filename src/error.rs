use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscoderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{reason}\n{valid}")]
    Usage { reason: String, valid: String },

    #[error("Character defined twice in symbol table: {0:?}")]
    DuplicateSymbol(char),
}

pub type Result<T> = std::result::Result<T, TranscoderError>;
