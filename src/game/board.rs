use super::PlayerId;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Largest height or width the front end accepts.
pub const MAX_DIMENSION: usize = 64;

/// Number of consecutive pieces needed to win.
pub const RUN_LENGTH: usize = 4;

/// Row/column steps for the four run directions, in the order they are
/// checked: horizontal, vertical, diagonal down-right, diagonal down-left.
const RUN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Fixed-size grid of cells, each empty or owned by a player.
///
/// Row 0 is the top, row `height - 1` is the bottom. Cells are stored
/// row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create a new empty board. Callers guarantee both dimensions are non-zero.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the owner of a cell, or `None` if it is empty or off the board
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// Returns `None` if the column is full or off the board.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_none())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.drop_row(col).is_none()
    }

    /// Occupy an empty cell. Occupied cells are never overwritten.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        let cell = &mut self.cells[row * self.width + col];
        debug_assert!(cell.is_none(), "cell ({row}, {col}) already occupied");
        if cell.is_none() {
            *cell = Some(player);
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check whether `player` owns a run of four anywhere on the board.
    ///
    /// Every cell is tried as the start of a run in each direction; a run
    /// counts only if all four cells are on the board and owned by `player`.
    pub fn has_run(&self, player: PlayerId) -> bool {
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                RUN_DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.is_run(row, col, dr, dc, player))
            })
        })
    }

    fn is_run(&self, row: usize, col: usize, dr: isize, dc: isize, player: PlayerId) -> bool {
        (0..RUN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            r >= 0
                && c >= 0
                && self.get(r as usize, c as usize) == Some(player)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
