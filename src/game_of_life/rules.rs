//! Conway's B3/S23 transition rule

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Neighbor counts that turn a dead cell alive
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![2, 3]
    }

    /// Get the maximum possible neighbor count for any cell
    pub fn max_neighbor_count() -> u8 {
        8 // Moore neighborhood
    }

    pub fn is_valid_neighbor_count(count: u8) -> bool {
        count <= Self::max_neighbor_count()
    }

    /// Advance the grid `generations` times
    pub fn evolve_generations(grid: &mut Grid, generations: usize) {
        for _ in 0..generations {
            grid.advance();
        }
    }

    /// A still life is unchanged by one step
    pub fn is_still_life(grid: &Grid) -> bool {
        let mut next = grid.clone();
        next.advance();
        next == *grid
    }

    /// Smallest period p in 1..=max_period such that p steps reproduce the
    /// grid. Still lifes have period 1.
    pub fn oscillation_period(grid: &Grid, max_period: usize) -> Option<usize> {
        let mut current = grid.clone();
        (1..=max_period).find(|_| {
            current.advance();
            current == *grid
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2)); // Survival with 2 neighbors
        assert!(GameOfLifeRules::should_be_alive(true, 3)); // Survival with 3 neighbors
        assert!(GameOfLifeRules::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 1)); // Underpopulation
        assert!(!GameOfLifeRules::should_be_alive(true, 4)); // Overpopulation
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 4));
    }

    #[test]
    fn test_rule_tables_agree_with_rule() {
        for count in 0..=GameOfLifeRules::max_neighbor_count() {
            assert_eq!(
                GameOfLifeRules::should_be_alive(false, count),
                GameOfLifeRules::birth_neighbor_counts().contains(&count)
            );
            assert_eq!(
                GameOfLifeRules::should_be_alive(true, count),
                GameOfLifeRules::survival_neighbor_counts().contains(&count)
            );
        }
        assert!(GameOfLifeRules::is_valid_neighbor_count(8));
        assert!(!GameOfLifeRules::is_valid_neighbor_count(9));
    }

    #[test]
    fn test_still_life_and_period() {
        let block = Grid::with_alive_cells(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert!(GameOfLifeRules::is_still_life(&block));
        assert_eq!(GameOfLifeRules::oscillation_period(&block, 4), Some(1));

        let blinker = Grid::with_alive_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        assert!(!GameOfLifeRules::is_still_life(&blinker));
        assert_eq!(GameOfLifeRules::oscillation_period(&blinker, 4), Some(2));

        let lonely = Grid::with_alive_cells(5, 5, &[(2, 2)]);
        assert_eq!(GameOfLifeRules::oscillation_period(&lonely, 4), None);
    }

    #[test]
    fn test_evolve_generations() {
        let mut grid = Grid::with_alive_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let original = grid.clone();

        GameOfLifeRules::evolve_generations(&mut grid, 4);
        assert_eq!(grid, original);
        assert_eq!(grid.generation(), 4);
    }
}
