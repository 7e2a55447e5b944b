//! Neighbor counting and the B3/S23 generation transition

use super::Board;

/// Moore neighborhood offsets, clockwise from the top-left
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

impl Board {
    /// Count live cells among the (up to) eight neighbors of `(x, y)`.
    ///
    /// The grid has hard edges: neighbors past any border count as dead.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
            else {
                continue;
            };
            if nx < self.width() && ny < self.height() && self.get(nx, ny) {
                count += 1;
            }
        }
        count
    }
}

/// Conway's rule for a single cell: survive on 2 or 3, birth on exactly 3
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation.
///
/// Every cell is decided from `board` alone; the result is a new board and
/// `board` is left untouched.
pub fn step(board: &Board) -> Board {
    let mut next = Board {
        width: board.width,
        height: board.height,
        cells: vec![false; board.cells.len()],
        population: 0,
    };

    for y in 0..board.height {
        for x in 0..board.width {
            if next_state(board.get(x, y), board.live_neighbors(x, y)) {
                next.set_alive(x, y);
            }
        }
    }

    log::trace!(
        "step {}x{}: population {} -> {}",
        board.width,
        board.height,
        board.population,
        next.population
    );
    next
}
