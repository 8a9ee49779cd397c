use crate::board::{destination, origin, Color, Game, Move, Role, Square};
use crate::rules::Rules;
use crate::types::{Score, CENTER_BONUS, RING_BONUS};

/// The four central squares.
pub const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// The twelve squares immediately surrounding the center.
pub const CENTER_RING: [Square; 12] = [
    Square::C3,
    Square::D3,
    Square::E3,
    Square::F3,
    Square::F4,
    Square::F5,
    Square::F6,
    Square::E6,
    Square::D6,
    Square::C6,
    Square::C5,
    Square::C4,
];

/// Scores a position together with the move under consideration. `None` means
/// there is no move to judge (frontier or finished line) and only the position counts.
pub trait Evaluate<P: Rules> {
    fn evaluate(&self, position: &P, mv: Option<&P::Move>) -> Score;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub king: Score,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 10_000,
        }
    }
}

impl PieceValues {
    pub fn of(&self, role: Role) -> Score {
        match role {
            Role::Pawn => self.pawn,
            Role::Knight => self.knight,
            Role::Bishop => self.bishop,
            Role::Rook => self.rook,
            Role::Queen => self.queen,
            Role::King => self.king,
        }
    }
}

/// Material + center control + capture value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    values: PieceValues,
}

impl Evaluator {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &PieceValues {
        &self.values
    }

    /// Absolute difference between White's and Black's material. Never negative,
    /// and blind to which side is ahead.
    pub fn material(&self, game: &Game) -> Score {
        let (mut white, mut black) = (0, 0);
        for (_, piece) in game.pieces() {
            let value = self.values.of(piece.role);
            match piece.color {
                Color::White => white += value,
                Color::Black => black += value,
            }
        }
        (white - black).abs()
    }

    pub fn center_bonus(&self, mv: &Move) -> Score {
        let to = destination(mv);
        if CENTER.contains(&to) {
            CENTER_BONUS
        } else if CENTER_RING.contains(&to) {
            RING_BONUS
        } else {
            0
        }
    }

    /// Value of whatever stands on the destination square, half again if its
    /// owner can take back on that square.
    pub fn capture_bonus(&self, game: &Game, mv: &Move) -> Score {
        let Some(captured) = game.piece_at(destination(mv)) else {
            return 0;
        };
        let value = self.values.of(captured.role);
        if is_defended_capture(game, mv) {
            value + value / 2
        } else {
            value
        }
    }
}

impl Evaluate<Game> for Evaluator {
    fn evaluate(&self, game: &Game, mv: Option<&Move>) -> Score {
        let mut score = self.material(game);
        if let Some(mv) = mv {
            score += self.center_bonus(mv);
            score += self.capture_bonus(game, mv);
        }
        score
    }
}

/// Is the piece on `mv`'s destination guarded by its own side, ready to recapture?
///
/// Answered from attack maps on the unchanged board with the mover's origin square
/// treated as vacated. Neither the position nor its side to move is touched.
pub fn is_defended_capture(game: &Game, mv: &Move) -> bool {
    let to = destination(mv);
    match game.piece_at(to) {
        Some(captured) => game.is_defended(to, captured.color, origin(mv)),
        None => false,
    }
}

/// Evaluates with the standard piece values.
pub fn evaluate(game: &Game, mv: Option<&Move>) -> Score {
    Evaluator::default().evaluate(game, mv)
}
