use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Bitboard, Board, CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Square};

use crate::error::BoardError;
use crate::rules::Rules;

const FIFTY_MOVE_HALFMOVES: u32 = 100;
const REPETITION_LIMIT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Draw,
}

/// A live chess game: the current position plus everything needed to take moves back.
///
/// Make/unmake is copy-based: each applied move pushes the previous position, and
/// undo pops it, so the pair is an exact inverse. Every position reached since the
/// game was created is hashed for repetition detection.
#[derive(Clone, Debug)]
pub struct Game {
    position: Chess,
    undo: Vec<Chess>,
    hashes: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Chess::default())
    }
}

impl Game {
    pub fn new(position: Chess) -> Self {
        let hash = zobrist(&position);
        Self {
            position,
            undo: Vec::new(),
            hashes: vec![hash],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let fen: Fen = fen.trim().parse()?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| BoardError::Position(e.to_string()))?;
        Ok(Self::new(position))
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.board().piece_at(sq)
    }

    /// All occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let board = self.position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(move |sq| board.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Is `sq` attacked by any piece of `side`?
    ///
    /// `ignoring` is treated as empty, so a slider behind a piece that is about to
    /// leave that square still counts. The board is read, never modified.
    pub fn is_defended(&self, sq: Square, side: Color, ignoring: Option<Square>) -> bool {
        let board = self.position.board();
        let mut occupied = board.occupied();
        if let Some(vacated) = ignoring {
            occupied = occupied & !Bitboard::from_square(vacated);
        }
        !board.attacks_to(sq, side, occupied).is_empty()
    }

    pub fn hash(&self) -> u64 {
        self.hashes.last().copied().unwrap_or_else(|| zobrist(&self.position))
    }

    /// Half-moves since the last capture or pawn move.
    pub fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }

    /// Moves applied since the game was created and not yet undone.
    pub fn plies(&self) -> usize {
        self.undo.len()
    }

    /// How many times the current position has occurred in this game.
    pub fn repetitions(&self) -> usize {
        let current = self.hash();
        self.hashes.iter().filter(|&&h| h == current).count()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_checkmate() {
            GameStatus::Checkmate
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Rules for Game {
    type Move = Move;
    type Side = Color;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().to_vec()
    }

    fn is_move_legal(&self, mv: &Move) -> bool {
        mv.from().is_some() && self.position.is_legal(mv)
    }

    fn apply_move(&mut self, mv: &Move) {
        self.undo.push(self.position.clone());
        self.position.play_unchecked(mv);
        self.hashes.push(zobrist(&self.position));
    }

    fn undo_move(&mut self) {
        debug_assert!(!self.undo.is_empty(), "undo without a matching apply");
        if let Some(previous) = self.undo.pop() {
            self.position = previous;
            self.hashes.pop();
        }
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.repetitions() >= REPETITION_LIMIT
    }

    fn side_to_move(&self) -> Color {
        self.position.turn()
    }
}

fn zobrist(position: &Chess) -> u64 {
    position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
}


// Copy-make: the undo stack holds whole previous positions. Pairing every push with exactly one
// pop is up to the caller (see `rules::Applied`).
