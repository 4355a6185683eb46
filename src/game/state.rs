/// Number of distinct color classes a tile can fall into
pub const COLOR_CLASSES: u8 = 14;

/// A position on the board, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

/// One square of the board.
///
/// The color class is derived from the value when the cell is built and is
/// only reachable through [`Cell::color`], so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: u32,
    color: u8,
}

impl Cell {
    pub const EMPTY: Cell = Cell { value: 0, color: 0 };

    pub fn new(value: u32) -> Self {
        Self {
            value,
            color: color_class(value),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Index into the palette, `floor(log2(value)) mod COLOR_CLASSES`
    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

fn color_class(value: u32) -> u8 {
    if value == 0 {
        return 0;
    }
    (value.ilog2() % COLOR_CLASSES as u32) as u8
}

/// The grid of tiles together with the score and the last spawn marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    pub(crate) score: u32,
    pub(crate) last_spawn: Option<Position>,
}

impl Board {
    /// Create an empty board
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
            score: 0,
            last_spawn: None,
        }
    }

    /// Build a board from explicit rows. Panics on ragged input.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut board = Self::new(height, width);

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "row {y} has a different width");
            for (x, &value) in row.iter().enumerate() {
                board.set_cell(y, x, value);
            }
        }

        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Moves made so far (one point per successful move)
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Where the most recent tile was spawned, if any
    pub fn last_spawn(&self) -> Option<Position> {
        self.last_spawn
    }

    fn index(&self, y: usize, x: usize) -> usize {
        debug_assert!(
            y < self.height && x < self.width,
            "cell ({y}, {x}) outside {}x{} board",
            self.height,
            self.width
        );
        y * self.width + x
    }

    pub fn get_cell(&self, y: usize, x: usize) -> u32 {
        self.cells[self.index(y, x)].value
    }

    pub fn cell(&self, y: usize, x: usize) -> Cell {
        self.cells[self.index(y, x)]
    }

    /// Write a value and its recomputed color class
    pub fn set_cell(&mut self, y: usize, x: usize, value: u32) {
        let idx = self.index(y, x);
        self.cells[idx] = Cell::new(value);
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Cell values row by row, handy for comparisons in tests
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    /// Empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Position::new(idx / self.width, idx % self.width))
            .collect()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(Cell::value).max().unwrap_or(0)
    }
}
