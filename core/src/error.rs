use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cup, only four cups are on the table")]
    InvalidCup,
    #[error("Invalid coin set, expected four H or T symbols")]
    InvalidCoinSet,
    #[error("Invalid flip choice, expected 0 to 3")]
    InvalidFlipChoice,
    #[error("Starting coins must not all show the same face")]
    UniformStart,
}

pub type Result<T> = core::result::Result<T, GameError>;
