//! A single grid position

/// One cell of a [`Grid`](super::Grid). The coordinates are fixed at
/// construction; only the alive flag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
}

impl Cell {
    /// Create a dead cell at column `x`, row `y`
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y, alive: false }
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Flip the alive flag and return the new state
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.alive = !self.alive;
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_dead() {
        let cell = Cell::new(3, 7);
        assert_eq!(cell.x(), 3);
        assert_eq!(cell.y(), 7);
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_toggle_keeps_coordinates() {
        let mut cell = Cell::new(1, 2);
        assert!(cell.toggle());
        assert!(cell.is_alive());
        assert!(!cell.toggle());
        assert_eq!((cell.x(), cell.y()), (1, 2));
    }
}
