//! Sliding and merging tiles.
//!
//! A move is processed line by line. A line is the row (left/right) or
//! column (up/down) the tiles travel along, indexed from the end the tiles
//! are pushed towards. Cells closest to that end are handled first, so they
//! settle before the cells behind them arrive and can act as merge targets.
//!
//! The algorithm is written against the small [`Grid`] trait so the same
//! code drives both real moves on a [`Board`] and the side-effect free
//! probes made through [`DryRun`].

use log::trace;

use super::action::Direction;
use super::state::{Board, Position};

trait Grid {
    /// (height, width)
    fn dims(&self) -> (usize, usize);
    fn get(&self, pos: Position) -> u32;
    fn set(&mut self, pos: Position, value: u32);
}

impl Grid for Board {
    fn dims(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    fn get(&self, pos: Position) -> u32 {
        self.get_cell(pos.y, pos.x)
    }

    fn set(&mut self, pos: Position, value: u32) {
        self.set_cell(pos.y, pos.x, value);
    }
}

/// Read-only view of a board that swallows every write.
///
/// Running a move through it answers "would anything move?" without
/// touching cells or score.
struct DryRun<'a>(&'a Board);

impl Grid for DryRun<'_> {
    fn dims(&self) -> (usize, usize) {
        (self.0.height(), self.0.width())
    }

    fn get(&self, pos: Position) -> u32 {
        self.0.get_cell(pos.y, pos.x)
    }

    fn set(&mut self, _pos: Position, _value: u32) {}
}

/// Board coordinates of the `k`-th cell of `line`, counted from the end
/// the tiles move towards
fn line_position(dir: Direction, line: usize, k: usize, height: usize, width: usize) -> Position {
    match dir {
        Direction::Left => Position::new(line, k),
        Direction::Right => Position::new(line, width - 1 - k),
        Direction::Up => Position::new(k, line),
        Direction::Down => Position::new(height - 1 - k, line),
    }
}

fn shift_grid<G: Grid>(grid: &mut G, dir: Direction) -> bool {
    let (height, width) = grid.dims();
    let (lines, len) = if dir.is_vertical() {
        (width, height)
    } else {
        (height, width)
    };

    if len < 2 {
        return false;
    }

    // Destinations that already absorbed a merge during the current line
    let mut merged = vec![false; len];
    let mut moved = false;

    for line in 0..lines {
        merged.fill(false);
        let at = |k: usize| line_position(dir, line, k, height, width);

        for k in 1..len {
            let value = grid.get(at(k));
            if value == 0 {
                continue;
            }

            // Furthest empty slot reachable towards the target end
            let mut dest = k;
            while dest > 0 && grid.get(at(dest - 1)) == 0 {
                dest -= 1;
            }

            if dest > 0 && grid.get(at(dest - 1)) == value && !merged[dest - 1] {
                grid.set(at(dest - 1), value * 2);
                grid.set(at(k), 0);
                merged[dest - 1] = true;
                moved = true;
            } else if dest != k {
                grid.set(at(dest), value);
                grid.set(at(k), 0);
                moved = true;
            }
        }
    }

    moved
}

impl Board {
    /// Push every tile in `dir`, merging equal neighbours once per move.
    ///
    /// Returns whether any tile moved. A successful move is worth exactly
    /// one point, however many merges it contained.
    pub fn shift(&mut self, dir: Direction) -> bool {
        let moved = shift_grid(self, dir);
        if moved {
            self.score += 1;
        }
        trace!("shift {dir:?}: moved={moved} score={}", self.score);
        moved
    }

    /// Same as [`Board::shift`] but takes the raw `(dy, dx)` vector.
    ///
    /// # Panics
    ///
    /// If the vector is not a unit step along exactly one axis.
    pub fn shift_vector(&mut self, dy: i32, dx: i32) -> bool {
        match Direction::from_delta(dy, dx) {
            Some(dir) => self.shift(dir),
            None => panic!("invalid move vector ({dy}, {dx})"),
        }
    }

    /// Whether [`Board::shift`] would move anything, without moving it
    pub fn can_shift(&self, dir: Direction) -> bool {
        shift_grid(&mut DryRun(self), dir)
    }

    /// True when no direction can move a tile
    pub fn is_game_over(&self) -> bool {
        !Direction::ALL.iter().any(|&dir| self.can_shift(dir))
    }
}
