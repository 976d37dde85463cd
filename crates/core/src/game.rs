//! Game module - jump-capture rules, score, and terminal-state detection
//!
//! Ties the board geometry to the rules of play. The only mutating
//! operation is [`Game::apply_move`]; everything else is a query.

use arrayvec::ArrayVec;

use marble_solitaire_types::{Cell, Direction, Move, DEFAULT_ARM_THICKNESS};

use crate::board::{Board, InvalidConfiguration};

/// A move rejected by the legality check.
///
/// All violated conditions (off-board endpoint, wrong occupancy, bad
/// displacement, empty midpoint) collapse into this one kind; the board is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMove(pub Move);

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "illegal move {}", self.0)
    }
}

impl std::error::Error for IllegalMove {}

/// Complete game state: the board plus the running score.
///
/// The score always equals the number of marbles on the board; it starts at
/// playable-cell count − 1 and drops by exactly 1 per successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    score: u32,
}

impl Game {
    /// Create a game with the given arm thickness and starting empty cell
    pub fn new(
        arm_thickness: i32,
        empty_row: i32,
        empty_col: i32,
    ) -> Result<Self, InvalidConfiguration> {
        let board = Board::new(arm_thickness, empty_row, empty_col)?;
        let score = board.marble_count();
        Ok(Self { board, score })
    }

    /// Default-thickness game with a caller-chosen empty cell
    pub fn with_empty(empty_row: i32, empty_col: i32) -> Result<Self, InvalidConfiguration> {
        Self::new(DEFAULT_ARM_THICKNESS, empty_row, empty_col)
    }

    /// Game of the given thickness with the empty cell at board center
    pub fn with_arm_thickness(arm_thickness: i32) -> Result<Self, InvalidConfiguration> {
        let center = (arm_thickness * 3 - 2) / 2;
        Self::new(arm_thickness, center, center)
    }

    /// Reference to the underlying board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of marbles remaining
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Render the board as text (see [`Board::render`])
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// Check whether a move satisfies every legality condition:
    /// playable endpoints, marble at the source, empty destination,
    /// axis-aligned length-2 displacement, and a marble at the midpoint.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        if !self.board.is_playable(mv.from_row, mv.from_col)
            || !self.board.is_playable(mv.to_row, mv.to_col)
        {
            return false;
        }
        if !mv.is_axis_aligned_jump() {
            return false;
        }

        let (mid_row, mid_col) = mv.midpoint();
        self.board.get(mv.from_row, mv.from_col) == Some(Cell::Marble)
            && self.board.get(mv.to_row, mv.to_col) == Some(Cell::Empty)
            && self.board.get(mid_row, mid_col) == Some(Cell::Marble)
    }

    /// Execute a jump-capture move.
    ///
    /// On success the source empties, the jumped marble is removed, the
    /// destination gains a marble, and the score drops by one. On failure
    /// the game is unchanged and the rejected move is returned in the error.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if !self.is_legal_move(mv) {
            return Err(IllegalMove(mv));
        }

        let (mid_row, mid_col) = mv.midpoint();
        self.board.set(mv.from_row, mv.from_col, Cell::Empty);
        self.board.set(mid_row, mid_col, Cell::Empty);
        self.board.set(mv.to_row, mv.to_col, Cell::Marble);
        self.score -= 1;

        Ok(())
    }

    /// Legal jumps starting at (row, col), at most one per direction
    pub fn legal_moves_from(&self, row: i32, col: i32) -> ArrayVec<Move, 4> {
        let mut moves = ArrayVec::new();
        for dir in Direction::ALL {
            let mv = Move::jump(row, col, dir);
            if self.is_legal_move(mv) {
                moves.push(mv);
            }
        }
        moves
    }

    /// All legal moves currently available on the board
    pub fn legal_moves(&self) -> Vec<Move> {
        let size = self.board.size();
        let mut moves = Vec::new();
        for row in 0..size {
            for col in 0..size {
                moves.extend(self.legal_moves_from(row, col));
            }
        }
        moves
    }

    /// True iff no legal move exists anywhere on the board.
    ///
    /// Full rescan on every call. Deliberately uncached: any move can change
    /// the legality of moves elsewhere, so a cache would need invalidation
    /// on every mutation. The scan is bounded and cheap at this board size.
    pub fn is_game_over(&self) -> bool {
        let size = self.board.size();
        for row in 0..size {
            for col in 0..size {
                for dir in Direction::ALL {
                    if self.is_legal_move(Move::jump(row, col, dir)) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Default for Game {
    /// The classic game: thickness 3, center empty
    fn default() -> Self {
        match Self::with_arm_thickness(DEFAULT_ARM_THICKNESS) {
            Ok(game) => game,
            Err(_) => unreachable!("default arm thickness is valid"),
        }
    }
}
