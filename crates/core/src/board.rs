//! Board module - manages the cross-shaped game grid
//!
//! The board is a square grid of side `arm_thickness * 3 - 2` where each cell
//! is a marble, an empty hole, or invalid (outside the cross). Uses a flat
//! row-major array for simple index arithmetic and cache locality.
//! Coordinates: (row, col), zero-based, row 0 at the top.
//!
//! The playable cross is a central `arm × arm` square plus four arms of the
//! same width reaching each edge; its shape never changes after construction.

use marble_solitaire_types::Cell;

/// Rejected construction parameters.
///
/// One error kind; the variants name the offending input for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// Arm thickness must be odd for the cross to be centered
    EvenArmThickness(i32),
    /// Arm thickness must be positive
    NonPositiveArmThickness(i32),
    /// Requested starting empty cell lies outside the cross
    UnplayableEmptyCell { row: i32, col: i32 },
}

impl std::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidConfiguration::EvenArmThickness(t)
            | InvalidConfiguration::NonPositiveArmThickness(t) => {
                write!(f, "arm thickness must be a positive odd number, got {}", t)
            }
            InvalidConfiguration::UnplayableEmptyCell { row, col } => {
                write!(f, "invalid empty cell position ({},{})", row, col)
            }
        }
    }
}

impl std::error::Error for InvalidConfiguration {}

/// The game board - a parametric cross-shaped grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    arm_thickness: i32,
    size: i32,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every playable cell holding a marble except the
    /// designated starting empty cell.
    pub fn new(
        arm_thickness: i32,
        empty_row: i32,
        empty_col: i32,
    ) -> Result<Self, InvalidConfiguration> {
        if arm_thickness <= 0 {
            return Err(InvalidConfiguration::NonPositiveArmThickness(arm_thickness));
        }
        if arm_thickness % 2 == 0 {
            return Err(InvalidConfiguration::EvenArmThickness(arm_thickness));
        }

        let size = arm_thickness * 3 - 2;
        let mut board = Self {
            arm_thickness,
            size,
            cells: vec![Cell::Invalid; (size * size) as usize],
        };

        if !board.is_playable(empty_row, empty_col) {
            return Err(InvalidConfiguration::UnplayableEmptyCell {
                row: empty_row,
                col: empty_col,
            });
        }

        for row in 0..size {
            for col in 0..size {
                if board.is_playable(row, col) {
                    board.set(row, col, Cell::Marble);
                }
            }
        }
        board.set(empty_row, empty_col, Cell::Empty);

        Ok(board)
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.size || col < 0 || col >= self.size {
            return None;
        }
        Some((row * self.size + col) as usize)
    }

    /// Arm thickness the board was built with
    pub fn arm_thickness(&self) -> i32 {
        self.arm_thickness
    }

    /// Side length of the square grid (`arm_thickness * 3 - 2`)
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Check whether (row, col) lies inside the playable cross.
    ///
    /// A cell is playable iff it is in the central square, or in the
    /// horizontal band with its column outside the square (horizontal arm),
    /// or in the vertical band with its row outside (vertical arm).
    /// Off-board coordinates are not playable.
    pub fn is_playable(&self, row: i32, col: i32) -> bool {
        if row < 0 || row >= self.size || col < 0 || col >= self.size {
            return false;
        }

        let min_center = self.arm_thickness - 1;
        let max_center = 2 * self.arm_thickness - 2;
        let row_in_band = row >= min_center && row <= max_center;
        let col_in_band = col >= min_center && col <= max_center;

        // Central square, horizontal arm, or vertical arm.
        (row_in_band && col_in_band)
            || (row_in_band && !col_in_band)
            || (col_in_band && !row_in_band)
    }

    /// Get cell at (row, col). Returns None if off the grid entirely.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if off the grid.
    ///
    /// Callers must not write to invalid cells; the game rules only touch
    /// coordinates that passed [`Board::is_playable`].
    pub(crate) fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of cells inside the playable cross
    pub fn playable_cell_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_playable()).count() as u32
    }

    /// Number of cells currently holding a marble
    pub fn marble_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == Cell::Marble).count() as u32
    }

    /// Render the board as text, one line per row.
    ///
    /// Cell symbols ('O' marble, '_' empty, ' ' invalid) are separated by a
    /// single space, with no separator after the last cell of a row and no
    /// newline after the last row. Invalid cells at the end of a row leave
    /// trailing blanks; that is part of the format.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.size * (self.size * 2)) as usize);
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = (row * self.size + col) as usize;
                out.push(self.cells[idx].symbol());
                if col < self.size - 1 {
                    out.push(' ');
                }
            }
            if row < self.size - 1 {
                out.push('\n');
            }
        }
        out
    }
}
