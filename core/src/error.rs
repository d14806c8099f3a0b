use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position is outside the board")]
    OutOfBounds,
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("Mine count does not match the mine mask")]
    MineCountMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
