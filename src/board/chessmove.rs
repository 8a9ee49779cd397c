use shakmaty::{File, Move, Square};

/// Square the moving piece starts from. `None` only for drops, which standard chess never produces.
#[inline]
pub fn origin(mv: &Move) -> Option<Square> {
    mv.from()
}

/// Square the moving piece lands on.
///
/// shakmaty encodes castling as king-takes-own-rook; here the destination is the
/// king's target square instead, so a castle is never mistaken for a capture.
pub fn destination(mv: &Move) -> Square {
    match *mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Square::from_coords(file, king.rank())
        }
        _ => mv.to(),
    }
}

/// Long algebraic (UCI) notation, e.g. `e2e4`, `e7e8q`, `e1g1`.
pub fn to_uci(mv: &Move) -> String {
    match origin(mv) {
        Some(from) => {
            let mut s = format!("{}{}", from, destination(mv));
            if let Some(promo) = mv.promotion() {
                s.push(promo.char());
            }
            s
        }
        None => "0000".to_string(),
    }
}
