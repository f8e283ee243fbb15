/// Errors raised by the game core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Every cell is covered by the snake, so food has nowhere to go
    #[error("no free cell left for food on a {width}x{height} grid")]
    BoardFull { width: usize, height: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type GameResult<T> = Result<T, GameError>;
