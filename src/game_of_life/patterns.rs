//! Named seed patterns that can be stamped onto a grid

use super::Grid;
use crate::error::LifeError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
        }
    }

    /// Rows of the pattern, '1' alive and '0' dead
    fn rows(self) -> &'static [&'static str] {
        match self {
            Pattern::Block => &["11", "11"],
            Pattern::Blinker => &["010", "010", "010"],
            Pattern::Toad => &["0111", "1110"],
            Pattern::Beacon => &["1100", "1100", "0011", "0011"],
            Pattern::Glider => &["010", "001", "111"],
        }
    }

    /// (dx, dy) offsets of the live cells relative to the top-left corner
    pub fn cells(self) -> Vec<(isize, isize)> {
        self.rows()
            .iter()
            .enumerate()
            .flat_map(|(dy, row)| {
                row.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'1')
                    .map(move |(dx, _)| (dx as isize, dy as isize))
            })
            .collect()
    }

    /// Bounding box as (width, height)
    pub fn size(self) -> (usize, usize) {
        let rows = self.rows();
        (rows[0].len(), rows.len())
    }

    /// Mark the pattern alive with its top-left corner at (x, y). Cells that
    /// land off-grid are dropped.
    pub fn place(self, grid: &mut Grid, x: isize, y: isize) {
        for (dx, dy) in self.cells() {
            grid.set_alive(x.saturating_add(dx), y.saturating_add(dy), true);
        }
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name() == wanted)
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
