//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, rendering, test fixtures).
//!
//! # Board Geometry
//!
//! The board is a square grid of side `arm_thickness * 3 - 2` whose playable
//! region forms a plus/cross shape: a central `arm × arm` square plus four
//! arms of the same width reaching each edge. Everything outside the cross is
//! permanently [`Cell::Invalid`].
//!
//! For the default `arm_thickness` of 3 the board is 7×7 with 33 playable
//! cells and the starting empty cell at the center (3, 3).

/// Default arm thickness (the classic English board).
pub const DEFAULT_ARM_THICKNESS: i32 = 3;

/// A jump always travels exactly two cells along one axis.
pub const JUMP_DISTANCE: i32 = 2;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Occupied playable cell
    Marble,
    /// Unoccupied playable cell
    Empty,
    /// Outside the cross; never holds a marble
    Invalid,
}

impl Cell {
    /// Render symbol for this cell state
    pub fn symbol(self) -> char {
        match self {
            Cell::Marble => 'O',
            Cell::Empty => '_',
            Cell::Invalid => ' ',
        }
    }

    /// Whether this cell belongs to the playable cross region
    pub fn is_playable(self) -> bool {
        !matches!(self, Cell::Invalid)
    }
}

/// The four axis-aligned jump directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset of a full jump in this direction
    pub fn jump_offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-JUMP_DISTANCE, 0),
            Direction::Down => (JUMP_DISTANCE, 0),
            Direction::Left => (0, -JUMP_DISTANCE),
            Direction::Right => (0, JUMP_DISTANCE),
        }
    }
}

/// A jump-capture move between two board positions.
///
/// Carries only coordinates; legality is decided by the game rules against
/// the current board. Coordinates are `i32` so off-board (including negative)
/// input can be represented and rejected instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
}

impl Move {
    pub fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// Build a move jumping from (row, col) in the given direction
    pub fn jump(row: i32, col: i32, dir: Direction) -> Self {
        let (dr, dc) = dir.jump_offset();
        Self::new(row, col, row + dr, col + dc)
    }

    /// The jumped-over cell. Only meaningful for axis-aligned length-2
    /// displacements, where the average is always an integer.
    pub fn midpoint(&self) -> (i32, i32) {
        (
            (self.from_row + self.to_row) / 2,
            (self.from_col + self.to_col) / 2,
        )
    }

    /// Whether the displacement is exactly two cells along one axis.
    ///
    /// Deliberately not `|Δrow| + |Δcol| == 2`: that form also admits the
    /// diagonal (1, 1) displacement, which is not a legal jump.
    pub fn is_axis_aligned_jump(&self) -> bool {
        let dr = (self.from_row - self.to_row).abs();
        let dc = (self.from_col - self.to_col).abs();
        (dr == JUMP_DISTANCE && dc == 0) || (dr == 0 && dc == JUMP_DISTANCE)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}) -> ({},{})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}
