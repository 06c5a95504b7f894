//! Chess board backed by shakmaty, with an undo stack.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::{
    Bitboard, CastlingMode, Chess, Color, EnPassantMode, Move, Outcome, Piece, Position, Role,
    Square,
};

use crate::rules::{Occupancy, Rules};
use crate::RulesError;

/// Halfmoves without a capture or pawn move after which the game is drawn.
const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Occurrences of the same position after which the game is drawn.
const FIVEFOLD: usize = 5;

#[derive(Debug, Clone)]
struct Snapshot {
    position: Chess,
    null: bool,
}

/// A chess position with a stack of previous positions.
///
/// Moves are applied in place and taken back by popping the stack. The same
/// stack provides the history needed for repetition detection, so moves
/// played over the course of a game and moves tried during search are
/// treated alike.
#[derive(Debug, Clone)]
pub struct Board {
    current: Chess,
    history: Vec<Snapshot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board at the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Wraps an existing shakmaty position.
    pub fn from_position(position: Chess) -> Self {
        Board {
            current: position,
            history: Vec::new(),
        }
    }

    /// Creates a board from a FEN string.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidFen`] if the string is not valid FEN, or
    /// [`RulesError::IllegalPosition`] if it describes an impossible position.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let fen: Fen = fen
            .trim()
            .parse()
            .map_err(|e| RulesError::InvalidFen(format!("{e}")))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::IllegalPosition(format!("{e}")))?;
        Ok(Self::from_position(position))
    }

    /// Returns the current shakmaty position.
    pub fn position(&self) -> &Chess {
        &self.current
    }

    /// Returns the FEN of the current position.
    pub fn fen(&self) -> String {
        Fen::from_setup(self.current.clone().into_setup(EnPassantMode::Legal)).to_string()
    }

    /// Number of moves (including null moves) currently on the stack.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Parses a move in SAN (`Nf3`, `exd5`, `O-O`) or UCI (`g1f3`) notation.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidMove`] if the text is neither a legal SAN
    /// nor a legal UCI move in the current position.
    pub fn parse_move(&self, text: &str) -> Result<Move, RulesError> {
        let text = text.trim();
        if let Ok(san) = text.parse::<SanPlus>() {
            if let Ok(mv) = san.san.to_move(&self.current) {
                return Ok(mv);
            }
        }
        self.current
            .legal_moves()
            .into_iter()
            .find(|mv| self.uci(mv) == text)
            .ok_or_else(|| RulesError::InvalidMove(text.to_string()))
    }

    /// Renders a move in SAN without a check suffix.
    pub fn san(&self, mv: &Move) -> String {
        San::from_move(&self.current, mv).to_string()
    }

    /// Renders a move in UCI notation.
    pub fn uci(&self, mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    /// Returns the result if the game is over.
    ///
    /// Draws by the 75-move rule and fivefold repetition are reported as
    /// [`Outcome::Draw`].
    pub fn outcome(&self) -> Option<Outcome> {
        self.current
            .outcome()
            .or_else(|| self.is_automatic_draw().then_some(Outcome::Draw))
    }

    /// Counts how often the current position has occurred, including now.
    ///
    /// The scan stops at the most recent null move: positions on the far side
    /// of a pass were not reached by play.
    pub fn repetitions(&self) -> usize {
        let reversible = self.current.halfmoves() as usize;
        1 + self
            .history
            .iter()
            .rev()
            .take(reversible)
            .take_while(|snapshot| !snapshot.null)
            .filter(|snapshot| same_position(&snapshot.position, &self.current))
            .count()
    }

    fn is_automatic_draw(&self) -> bool {
        self.current.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES || self.repetitions() >= FIVEFOLD
    }

    fn pop(&mut self, null: bool) {
        match self.history.pop() {
            Some(snapshot) => {
                debug_assert_eq!(snapshot.null, null, "undo does not match the last apply");
                self.current = snapshot.position;
            }
            None => debug_assert!(false, "undo with an empty move stack"),
        }
    }
}

fn same_position(a: &Chess, b: &Chess) -> bool {
    a.turn() == b.turn()
        && a.board() == b.board()
        && a.castles().castling_rights() == b.castles().castling_rights()
        && a.ep_square(EnPassantMode::Legal) == b.ep_square(EnPassantMode::Legal)
}

impl Rules for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.current.legal_moves().into_iter().collect()
    }

    fn apply(&mut self, mv: &Move) {
        let next = {
            let mut next = self.current.clone();
            next.play_unchecked(mv);
            next
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(Snapshot {
            position: previous,
            null: false,
        });
    }

    fn undo(&mut self) {
        self.pop(false);
    }

    fn apply_null(&mut self) -> Result<(), RulesError> {
        if self.current.is_check() {
            return Err(RulesError::NullMoveInCheck);
        }
        let next = self
            .current
            .clone()
            .swap_turn()
            .map_err(|e| RulesError::IllegalPosition(format!("{e}")))?;
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(Snapshot {
            position: previous,
            null: true,
        });
        Ok(())
    }

    fn undo_null(&mut self) {
        self.pop(true);
    }

    fn is_game_over(&self) -> bool {
        self.current.is_game_over() || self.is_automatic_draw()
    }

    fn is_check(&self) -> bool {
        self.current.is_check()
    }

    fn turn(&self) -> Color {
        self.current.turn()
    }
}

impl Occupancy for Board {
    fn pieces_of(&self, role: Role, color: Color) -> Bitboard {
        self.current.board().by_piece(Piece { color, role })
    }
}

impl fmt::Display for Board {
    /// Eight ranks from the eighth down, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u32).rev() {
            let row: Vec<String> = (0..8u32)
                .map(|file| {
                    let square = Square::new(rank * 8 + file);
                    match self.current.board().piece_at(square) {
                        Some(piece) => piece.char().to_string(),
                        None => ".".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(board: &mut Board, moves: &[&str]) {
        for text in moves {
            let mv = board.parse_move(text).unwrap();
            board.apply(&mv);
        }
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves().len(), 20);
        assert_eq!(board.turn(), Color::White);
        assert!(!board.is_game_over());
    }

    #[test]
    fn apply_and_undo_restore_fen() {
        let mut board = Board::new();
        let start = board.fen();
        let mv = board.parse_move("e4").unwrap();
        board.apply(&mv);
        assert_eq!(board.turn(), Color::Black);
        assert_ne!(board.fen(), start);
        board.undo();
        assert_eq!(board.fen(), start);
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn null_move_swaps_turn() {
        let mut board = Board::new();
        board.apply_null().unwrap();
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.ply_count(), 1);
        board.undo_null();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.fen(), Board::new().fen());
    }

    #[test]
    fn null_move_refused_in_check() {
        let mut board = Board::from_fen("4r1k1/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(board.apply_null(), Err(RulesError::NullMoveInCheck));
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn parses_san_and_uci() {
        let board = Board::new();
        let san = board.parse_move("Nf3").unwrap();
        let uci = board.parse_move("g1f3").unwrap();
        assert_eq!(san, uci);
        assert_eq!(board.san(&san), "Nf3");
        assert_eq!(board.uci(&san), "g1f3");
    }

    #[test]
    fn rejects_illegal_move_text() {
        let board = Board::new();
        assert!(matches!(
            board.parse_move("e5"),
            Err(RulesError::InvalidMove(_))
        ));
        assert!(board.parse_move("nonsense").is_err());
        assert!(board.parse_move("e2e5").is_err());
    }

    #[test]
    fn rejects_bad_fen() {
        assert!(matches!(
            Board::from_fen("not a fen"),
            Err(RulesError::InvalidFen(_))
        ));
        // No kings
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(RulesError::IllegalPosition(_))
        ));
    }

    #[test]
    fn fools_mate_is_game_over() {
        let mut board = Board::new();
        play_all(&mut board, &["f3", "e5", "g4", "Qh4"]);
        assert!(board.is_game_over());
        assert_eq!(
            board.outcome(),
            Some(Outcome::Decisive {
                winner: Color::Black
            })
        );
    }

    #[test]
    fn stalemate_is_game_over() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn insufficient_material_is_game_over() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_game_over());
    }

    #[test]
    fn seventy_five_move_rule_is_game_over() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 150 100").unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.outcome(), Some(Outcome::Draw));
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 149 100").unwrap();
        assert!(!board.is_game_over());
    }

    #[test]
    fn fivefold_repetition_is_game_over() {
        let mut board = Board::new();
        let shuffle = ["Nf3", "Nf6", "Ng1", "Ng8"];
        for _ in 0..3 {
            play_all(&mut board, &shuffle);
        }
        assert_eq!(board.repetitions(), 4);
        assert!(!board.is_game_over());
        play_all(&mut board, &shuffle);
        assert_eq!(board.repetitions(), 5);
        assert!(board.is_game_over());
    }

    #[test]
    fn repetitions_do_not_reach_across_a_null_move() {
        let mut board = Board::new();
        play_all(&mut board, &["Nf3", "Nf6", "Ng1", "Ng8"]);
        assert_eq!(board.repetitions(), 2);

        board.apply_null().unwrap();
        board.apply_null().unwrap();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.repetitions(), 1);

        board.undo_null();
        board.undo_null();
        assert_eq!(board.repetitions(), 2);
    }

    #[test]
    fn pieces_of_reports_occupancy() {
        let board = Board::new();
        let white_pawns = board.pieces_of(Role::Pawn, Color::White);
        assert_eq!(white_pawns.count(), 8);
        assert!(white_pawns.contains(Square::E2));
        let black_king = board.pieces_of(Role::King, Color::Black);
        assert_eq!(black_king.into_iter().collect::<Vec<_>>(), vec![Square::E8]);
    }

    #[test]
    fn display_draws_eight_ranks() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[7], "R N B Q K B N R");
    }
}
