use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameListError {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json5 error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Unknown entry type {name}")]
    UnknownEntryType { name: String },
    #[error("Invalid color {text}")]
    InvalidColor { text: String },
}

pub type GameListResult<T> = std::result::Result<T, GameListError>;
