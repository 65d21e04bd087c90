use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("deck has no slides")]
    EmptyDeck,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
