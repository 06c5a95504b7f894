//! Static evaluation.

use shakmaty::{Color, Role};

use crate::rules::Occupancy;
use crate::tables;

/// Evaluation in centipawns. Positive favours White.
pub type Score = i32;

/// Bound used for search windows and initial best values.
pub const INFINITY: Score = 100_000;

const PAWN_VALUE: Score = 100;
const KNIGHT_VALUE: Score = 300;
const BISHOP_VALUE: Score = 300;
const ROOK_VALUE: Score = 500;
const QUEEN_VALUE: Score = 900;

const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Leaf evaluation used by the search.
pub trait Evaluator<P> {
    /// Scores a position from White's point of view.
    fn evaluate(&self, position: &P) -> Score;
}

/// Material plus piece-square tables; see [`evaluate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl<P: Occupancy> Evaluator<P> for PieceSquareEvaluator {
    fn evaluate(&self, position: &P) -> Score {
        evaluate(position)
    }
}

/// Material value of one piece. The king has none.
pub const fn material(role: Role) -> Score {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => 0,
    }
}

/// Evaluates a position from White's point of view.
///
/// The score is the material balance plus, for every piece, its
/// piece-square bonus: `TABLE[sq]` for White and `-TABLE[mirror(sq)]` for
/// Black. Checkmate and stalemate get no special treatment.
pub fn evaluate<P: Occupancy>(position: &P) -> Score {
    ROLES
        .iter()
        .map(|&role| {
            let white = position.pieces_of(role, Color::White);
            let black = position.pieces_of(role, Color::Black);
            let table = tables::table(role);

            let balance = white.count() as Score - black.count() as Score;
            let white_placement: Score = white.into_iter().map(|sq| table[usize::from(sq)]).sum();
            let black_placement: Score = black
                .into_iter()
                .map(|sq| table[usize::from(P::mirror(sq))])
                .sum();

            material(role) * balance + white_placement - black_placement
        })
        .sum()
}
