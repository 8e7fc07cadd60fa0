use rand::Rng;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// The opposite state
    pub fn flipped(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Fixed-size toroidal grid of cells, stored row-major.
///
/// Every access wraps both coordinates with Euclidean modulo, so row `-1` is
/// the last row and column `cols` is column `0`. Nothing outside this type
/// ever needs a bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-dead board.
    ///
    /// Zero dimensions are bumped to 1; `GameConfig::validate` rejects them
    /// before a board is ever built from user input.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a board from text rows, `#` alive and anything else dead.
    /// Short rows are padded with dead cells up to the widest row.
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(1);
        let mut board = Self::new(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            for (j, ch) in row.chars().enumerate() {
                if ch == '#' {
                    board.set(i as i64, j as i64, Cell::Alive);
                }
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat offset of `(i, j)` after wrapping both coordinates
    pub fn index(&self, i: i64, j: i64) -> usize {
        let row = i.rem_euclid(self.rows as i64) as usize;
        let col = j.rem_euclid(self.cols as i64) as usize;
        row * self.cols + col
    }

    pub fn get(&self, i: i64, j: i64) -> Cell {
        self.cells[self.index(i, j)]
    }

    pub fn set(&mut self, i: i64, j: i64, cell: Cell) {
        let idx = self.index(i, j);
        self.cells[idx] = cell;
    }

    pub fn toggle(&mut self, i: i64, j: i64) {
        let idx = self.index(i, j);
        self.cells[idx] = self.cells[idx].flipped();
    }

    /// Set every cell alive with probability `alive_probability`, dead otherwise.
    /// Values outside `[0, 1]` are clamped and NaN counts as zero.
    pub fn randomize<R: Rng + ?Sized>(&mut self, alive_probability: f64, rng: &mut R) {
        let p = if alive_probability.is_nan() {
            0.0
        } else {
            alive_probability.clamp(0.0, 1.0)
        };
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(p) { Cell::Alive } else { Cell::Dead };
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
