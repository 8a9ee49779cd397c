use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search depth must be at least one ply")]
    ZeroDepth,
    #[error("no move available: the game is over")]
    NoMove,
    #[error("chosen move {0} failed re-validation")]
    IllegalMove(String),
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid fen: {0}")]
    Fen(#[from] shakmaty::fen::ParseFenError),
    #[error("illegal position: {0}")]
    Position(String),
}
