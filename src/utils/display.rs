//! Display and output formatting utilities

use crate::game_of_life::{GenerationStats, Grid};
use anyhow::Result;
use serde::Serialize;

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for row in grid.cells().chunks(grid.width().max(1)) {
            for cell in row {
                output.push(if cell.is_alive() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.cells().chunks(grid.width().max(1)).enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line summary of an advance
    pub fn format_stats(stats: &GenerationStats) -> String {
        format!(
            "Generation {}: {} alive (+{} / -{})",
            stats.generation, stats.population, stats.births, stats.deaths
        )
    }
}

/// Machine-readable snapshot of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub population: usize,
    pub alive: Vec<(usize, usize)>,
}

impl GenerationReport {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            generation: grid.generation(),
            width: grid.width(),
            height: grid.height(),
            population: grid.living_count(),
            alive: grid.living_cells(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
