//! Fixed-size Game of Life grid with a double-buffered generation step

use super::cell::Cell;
use super::rules::GameOfLifeRules;
use crate::error::LifeError;
use itertools::iproduct;
use std::fmt;

/// A bounded `width` x `height` grid of cells addressed by (column, row).
///
/// Two cell buffers are kept. `advance` reads exclusively from the active
/// buffer and writes every cell of the inactive one before flipping `active`,
/// so no cell of generation N+1 is ever observed while computing N+1.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    buffers: [Vec<Cell>; 2],
    active: usize,
    generation: u64,
}

/// Summary of a single `advance` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: u64,
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(width: usize, height: usize) -> Self {
        let cells: Vec<Cell> = iproduct!(0..height, 0..width)
            .map(|(y, x)| Cell::new(x, y))
            .collect();

        Self {
            width,
            height,
            buffers: [cells.clone(), cells],
            active: 0,
            generation: 0,
        }
    }

    /// Create a grid and mark the given (x, y) cells alive. Off-grid
    /// coordinates are dropped, same as `set_alive`.
    pub fn with_alive_cells(width: usize, height: usize, alive: &[(isize, isize)]) -> Self {
        let mut grid = Self::new(width, height);
        for &(x, y) in alive {
            grid.set_alive(x, y, true);
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of `advance` calls applied so far
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells of the current generation in row-major order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.buffers[self.active]
    }

    /// Whether (x, y) lies inside [0, width) x [0, height)
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some()
    }

    #[inline]
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn out_of_bounds(&self, x: isize, y: isize) -> LifeError {
        LifeError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// The cell at (x, y), if in bounds
    pub fn cell(&self, x: isize, y: isize) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.buffers[self.active][idx])
    }

    /// Alive flag at (x, y). Off-grid positions read as dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_alive)
    }

    /// Alive flag at (x, y), rejecting off-grid positions
    pub fn try_is_alive(&self, x: isize, y: isize) -> Result<bool, LifeError> {
        self.cell(x, y)
            .map(Cell::is_alive)
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Set the alive flag at (x, y). Off-grid writes are a no-op.
    pub fn set_alive(&mut self, x: isize, y: isize, alive: bool) {
        if let Some(idx) = self.index(x, y) {
            self.buffers[self.active][idx].set_alive(alive);
        }
    }

    /// Flip the cell at (x, y) and return its new state, or `None` (grid
    /// untouched) when off-grid.
    pub fn toggle(&mut self, x: isize, y: isize) -> Option<bool> {
        let idx = self.index(x, y)?;
        Some(self.buffers[self.active][idx].toggle())
    }

    /// Flip the cell at (x, y), rejecting off-grid positions
    pub fn try_toggle(&mut self, x: isize, y: isize) -> Result<bool, LifeError> {
        self.toggle(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Count alive cells among the 8 neighbors of (x, y). Neighbors outside
    /// the grid count as dead; nothing wraps.
    pub fn count_alive_neighbors(&self, x: isize, y: isize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(nx, ny)| self.is_alive(nx, ny))
            .count() as u8
    }

    /// Compute the next generation in full, then make it current.
    pub fn advance(&mut self) -> GenerationStats {
        let next = 1 - self.active;
        let mut births = 0;
        let mut deaths = 0;
        let mut population = 0;

        for idx in 0..self.width * self.height {
            let (x, y) = ((idx % self.width) as isize, (idx / self.width) as isize);
            let alive = self.buffers[self.active][idx].is_alive();
            let neighbors = self.count_alive_neighbors(x, y);
            let next_alive = GameOfLifeRules::should_be_alive(alive, neighbors);

            match (alive, next_alive) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
            if next_alive {
                population += 1;
            }

            self.buffers[next][idx].set_alive(next_alive);
        }

        self.active = next;
        self.generation += 1;

        log::trace!(
            "generation {}: +{} -{} population {}",
            self.generation,
            births,
            deaths,
            population
        );

        GenerationStats {
            generation: self.generation,
            births,
            deaths,
            population,
        }
    }

    /// Kill every cell of the current generation
    pub fn clear(&mut self) {
        for cell in self.buffers[self.active].iter_mut() {
            cell.set_alive(false);
        }
    }

    /// (x, y) of every living cell in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.x(), cell.y()))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells().iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells().iter().all(|cell| !cell.is_alive())
    }
}

/// Two grids are equal when they have the same dimensions and the same live
/// cells; the generation counter is ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .cells()
                .iter()
                .zip(other.cells())
                .all(|(a, b)| a.is_alive() == b.is_alive())
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks(self.width.max(1)) {
            for cell in row {
                let symbol = if cell.is_alive() { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
