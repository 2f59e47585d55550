//! The Game of Life transition rule and the synchronous step

use super::Grid;
use rayon::prelude::*;

/// Next state of a single cell under Conway's rules.
///
/// Live with 2 or 3 live neighbors survives, dead with exactly 3 is born,
/// everything else is dead.
pub fn should_live(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

impl Grid {
    /// Advance the grid one generation.
    ///
    /// The whole next state is computed from the current state into a fresh
    /// buffer, then swapped in as one assignment. Every cell's new value
    /// depends only on the prior generation; an in-place scan would let
    /// already-updated cells leak into their neighbors' counts and break
    /// oscillators.
    pub fn step(&mut self) {
        let current = &*self;
        let width = current.width();
        let next: Vec<bool> = (0..current.height())
            .into_par_iter()
            .flat_map_iter(move |y| {
                (0..width).map(move |x| {
                    should_live(current.get(x, y), current.count_neighbors(x, y))
                })
            })
            .collect();
        self.replace_cells(next);
    }

    /// Advance the grid `generations` steps.
    pub fn step_generations(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        assert!(should_live(true, 2));
        assert!(should_live(true, 3));
        assert!(should_live(false, 3));
        assert!(!should_live(true, 0));
        assert!(!should_live(true, 1));
        assert!(!should_live(true, 4));
        assert!(!should_live(false, 2));
        assert!(!should_live(false, 0));
        assert!(!should_live(false, 8));
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.step();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, true).unwrap();
        grid.step();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_block_is_stable() {
        let mut grid = Grid::new(4, 4).unwrap();
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set(x, y, true).unwrap();
        }
        let before = grid.clone();
        for _ in 0..10 {
            grid.step();
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5).unwrap();
        // Horizontal line at (1,2), (2,2), (3,2)
        for x in 1..=3 {
            grid.set(x, 2, true).unwrap();
        }
        let horizontal = grid.clone();

        grid.step();
        assert_eq!(grid.live_count(), 3);
        assert_eq!(grid.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);

        grid.step();
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn test_step_at_grid_edge() {
        // A blinker jammed against the left edge still oscillates within
        // bounds; nothing is born outside the grid.
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            grid.set(0, y, true).unwrap();
        }
        grid.step();
        assert_eq!(grid.live_cells(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_step_generations_matches_repeated_step() {
        let mut a = Grid::new(6, 6).unwrap();
        for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            a.set(x, y, true).unwrap();
        }
        let mut b = a.clone();

        a.step_generations(4);
        for _ in 0..4 {
            b.step();
        }
        assert_eq!(a, b);
        // A glider translates by (1,1) every 4 generations
        assert_eq!(a.live_count(), 5);
    }
}
