mod chessmove;
mod game;

pub use chessmove::{destination, origin, to_uci};
pub use game::{Game, GameStatus};
pub use shakmaty::{Color, Move, Piece, Role, Square};
