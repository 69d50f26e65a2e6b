use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Cell, Snake};

/// The single piece of food on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        Self::at(random_free_cell(rng, bounds, snake))
    }

    /// Moves the food to a fresh cell the snake does not occupy and returns it.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Cell {
        self.position = random_free_cell(rng, bounds, snake);
        self.position
    }

    #[must_use]
    pub fn position(self) -> Cell {
        self.position
    }

    pub fn set_position(&mut self, position: Cell) {
        self.position = position;
    }
}

/// Samples uniformly random cells until one is free of the snake.
///
/// Rejection sampling only stays cheap while the snake covers a small part
/// of the board. It never returns if the snake fills every cell.
#[must_use]
pub fn random_free_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Cell {
    debug_assert!(
        snake.len() < bounds.total_cells(),
        "random_free_cell: no free cells on the board ({}×{})",
        bounds.width,
        bounds.height,
    );

    loop {
        let candidate = Cell {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
