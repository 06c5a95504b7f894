//! Helpers shared by the integration tests.

#![allow(dead_code)]

use chess_search::{Board, Evaluator, Rules, RulesError, Score, INFINITY};
use shakmaty::Color;

/// Plain minimax without any pruning.
pub fn full_minimax<R, E>(position: &mut R, evaluator: &E, depth: i32, maximizing: bool) -> Score
where
    R: Rules,
    E: Evaluator<R>,
{
    if depth <= 0 || position.is_game_over() {
        return evaluator.evaluate(position);
    }
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in position.legal_moves() {
        position.apply(&mv);
        let value = full_minimax(position, evaluator, depth - 1, !maximizing);
        position.undo();
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Plays one move per seed, each chosen by index modulo the move count.
pub fn playout(seeds: &[usize]) -> Board {
    let mut board = Board::new();
    for seed in seeds {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        board.apply(&moves[seed % moves.len()]);
    }
    board
}

/// FEN of the position with ranks reflected, colours swapped and the other
/// side to move. Castling and en passant rights are dropped.
pub fn color_flipped_fen(board: &Board) -> String {
    let fen = board.fen();
    let mut fields = fen.split_whitespace();
    let placement = fields.next().expect("placement field");
    let turn = fields.next().expect("turn field");

    let ranks: Vec<String> = placement
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect()
        })
        .collect();
    let turn = if turn == "w" { "b" } else { "w" };
    format!("{} {} - - 0 1", ranks.join("/"), turn)
}

/// A game tree with a value on every node, searched through [`Rules`].
#[derive(Debug, Clone)]
pub struct Tree {
    children: Vec<Vec<usize>>,
    values: Vec<Score>,
    path: Vec<usize>,
}

impl Tree {
    /// Builds a tree breadth first. Node `i` below `depth` gets the next entry
    /// of `widths` as its child count (the root at least one child); node
    /// values cycle through `values`.
    pub fn build(depth: usize, widths: &[usize], values: &[Score]) -> Tree {
        let mut widths = widths.iter().copied().cycle();
        let mut next_value = values.iter().copied().cycle();
        let mut children = vec![Vec::new()];
        let mut tree_values = vec![next_value.next().unwrap_or(0)];
        let mut levels = vec![0usize];

        let mut node = 0;
        while node < children.len() {
            if levels[node] < depth {
                let mut width = widths.next().unwrap_or(1);
                if node == 0 {
                    width = width.max(1);
                }
                for _ in 0..width {
                    let id = children.len();
                    children.push(Vec::new());
                    tree_values.push(next_value.next().unwrap_or(0));
                    levels.push(levels[node] + 1);
                    children[node].push(id);
                }
            }
            node += 1;
        }

        Tree {
            children,
            values: tree_values,
            path: vec![0],
        }
    }

    fn node(&self) -> usize {
        *self.path.last().expect("path always holds the root")
    }

    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

impl Rules for Tree {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.children[self.node()].clone()
    }

    fn apply(&mut self, mv: &usize) {
        self.path.push(*mv);
    }

    fn undo(&mut self) {
        self.path.pop();
    }

    fn apply_null(&mut self) -> Result<(), RulesError> {
        Err(RulesError::NullMoveInCheck)
    }

    fn undo_null(&mut self) {
        unreachable!("null moves are never applied to a tree");
    }

    fn is_game_over(&self) -> bool {
        self.children[self.node()].is_empty()
    }

    fn is_check(&self) -> bool {
        false
    }

    fn turn(&self) -> Color {
        if self.depth() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// Reads the value stored on the current node.
pub struct NodeValue;

impl Evaluator<Tree> for NodeValue {
    fn evaluate(&self, position: &Tree) -> Score {
        position.values[position.node()]
    }
}
