//! Software framebuffer and grid rendering

use crate::config::{DisplayConfig, Rgb};
use crate::game_of_life::Grid;
use std::ops::Range;

/// An RGB framebuffer. Drawing outside it is clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb(0, 0, 0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: isize, y: isize) -> Option<Rgb> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn put(&mut self, x: isize, y: isize, color: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, x: isize, y: isize, w: usize, h: usize, color: Rgb) {
        for py in clip_span(y, h, self.height) {
            for px in clip_span(x, w, self.width) {
                self.put(px, py, color);
            }
        }
    }

    /// One-pixel outline of the `w` x `h` rectangle at (x, y)
    pub fn draw_rect(&mut self, x: isize, y: isize, w: usize, h: usize, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x.saturating_add(to_isize(w - 1));
        let bottom = y.saturating_add(to_isize(h - 1));
        for px in clip_span(x, w, self.width) {
            self.put(px, y, color);
            self.put(px, bottom, color);
        }
        for py in clip_span(y, h, self.height) {
            self.put(x, py, color);
            self.put(right, py, color);
        }
    }

    /// Draw the whole scene: background, one square per cell, then the
    /// border outlines growing outward from the grid edge.
    pub fn render(&mut self, grid: &Grid, display: &DisplayConfig) {
        self.clear(display.dead_color);

        let size = display.cell_size;
        for cell in grid.cells() {
            let color = if cell.is_alive() {
                display.alive_color
            } else {
                display.dead_color
            };
            // Cells whose origin does not fit in pixel space are off-frame
            let (Some(px), Some(py)) =
                (pixel_origin(cell.x(), size), pixel_origin(cell.y(), size))
            else {
                continue;
            };
            self.fill_rect(px, py, size, size, color);
        }

        let grid_w = grid.width().saturating_mul(size);
        let grid_h = grid.height().saturating_mul(size);
        for i in 0..display.border_width {
            let grow = i.saturating_mul(2);
            self.draw_rect(
                -to_isize(i),
                -to_isize(i),
                grid_w.saturating_add(grow),
                grid_h.saturating_add(grow),
                display.border_color,
            );
        }
    }
}

#[inline]
fn to_isize(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}

/// Pixel coordinate of the first pixel of cell `index`
fn pixel_origin(index: usize, cell_size: usize) -> Option<isize> {
    index
        .checked_mul(cell_size)
        .and_then(|v| isize::try_from(v).ok())
}

/// The part of `start..start + len` that lies inside `0..limit`
fn clip_span(start: isize, len: usize, limit: usize) -> Range<isize> {
    let end = start.saturating_add(to_isize(len));
    let limit = to_isize(limit);
    start.clamp(0, limit)..end.clamp(0, limit)
}
