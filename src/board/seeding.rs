//! Random placement of the initial population
//!
//! Sparse boards use rejection sampling: draw a random cell, retry if it is
//! already alive. That loop slows down badly as the board fills up, so dense
//! requests draw distinct indices over the whole board instead.

use super::Board;
use crate::errors::LifeError;
use rand::seq::index;
use rand::Rng;

/// How live cells are placed on a fresh board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Draw random coordinates, retrying on cells that are already alive
    Rejection,
    /// Draw `population` distinct cell indices in one pass
    IndexSample,
}

impl SeedStrategy {
    /// Rejection sampling up to half occupancy, index sampling above it
    pub fn for_density(population: usize, area: usize) -> Self {
        if population.saturating_mul(2) <= area {
            SeedStrategy::Rejection
        } else {
            SeedStrategy::IndexSample
        }
    }
}

/// Build a `width` x `height` board with exactly `population` live cells at
/// distinct, uniformly random positions.
pub fn seed<R: Rng>(
    width: usize,
    height: usize,
    population: usize,
    rng: &mut R,
) -> Result<Board, LifeError> {
    let board = Board::empty(width, height)?;
    let strategy = SeedStrategy::for_density(population, board.area());
    seed_with(board, population, strategy, rng)
}

/// Same as [`seed`] with an explicit placement strategy
pub fn seed_with_strategy<R: Rng>(
    width: usize,
    height: usize,
    population: usize,
    strategy: SeedStrategy,
    rng: &mut R,
) -> Result<Board, LifeError> {
    seed_with(Board::empty(width, height)?, population, strategy, rng)
}

fn seed_with<R: Rng>(
    mut board: Board,
    population: usize,
    strategy: SeedStrategy,
    rng: &mut R,
) -> Result<Board, LifeError> {
    let capacity = board.area();
    if population > capacity {
        return Err(LifeError::PopulationOutOfRange {
            requested: population,
            capacity,
        });
    }

    log::debug!(
        "seeding {}x{} board with {} cells using {:?}",
        board.width(),
        board.height(),
        population,
        strategy
    );

    match strategy {
        SeedStrategy::Rejection => {
            while board.population() < population {
                let x = rng.gen_range(0..board.width());
                let y = rng.gen_range(0..board.height());
                board.set_alive(x, y);
            }
        }
        SeedStrategy::IndexSample => {
            let width = board.width();
            for i in index::sample(rng, capacity, population) {
                board.set_alive(i % width, i / width);
            }
        }
    }

    Ok(board)
}
