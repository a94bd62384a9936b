use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid tile index")]
    InvalidTile,
    #[error("Not enough coins")]
    InsufficientCoins,
    #[error("Not enough seeds")]
    InsufficientSeeds,
}

pub type Result<T> = core::result::Result<T, GameError>;
