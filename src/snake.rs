use std::collections::VecDeque;

use crate::config::{GridSize, START_BODY, START_DIRECTION};
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Segment chain and heading of the player's snake.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_growth: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the three-cell starting snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self::from_segments(START_BODY.to_vec(), START_DIRECTION)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: false,
        }
    }

    /// Moves one cell in the current direction.
    ///
    /// A pending growth request is consumed here: the tail stays put and the
    /// body ends up one cell longer.
    pub fn advance(&mut self) {
        let next_head = self.head().step(self.direction);
        self.body.push_front(next_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Turns the snake, refusing a direct reversal of the current direction.
    ///
    /// Returns `true` when the direction was accepted. The guard compares
    /// against the stored direction, which an earlier accepted call in the
    /// same tick has already overwritten.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Queues growth on the next advance. Repeated calls before that advance
    /// still grow by one cell.
    pub fn request_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Restores the starting body and direction.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(START_BODY);
        self.direction = START_DIRECTION;
        self.pending_growth = false;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
