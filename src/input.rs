use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order a frame's presses are applied.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    fn check_index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Right => 2,
            Self::Left => 3,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit `(dx, dy)` step; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Inputs gathered during one frame.
///
/// Each direction counts at most once per frame, however often it arrived,
/// and pressed directions are applied in [`Direction::ALL`] order rather
/// than arrival order.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub quit: bool,
    pressed: [bool; 4],
}

impl FrameInput {
    /// Folds a frame's inputs.
    #[must_use]
    pub fn collect<I: IntoIterator<Item = GameInput>>(inputs: I) -> Self {
        let mut frame = Self::default();
        for input in inputs {
            match input {
                GameInput::Direction(direction) => {
                    frame.pressed[direction.check_index()] = true;
                }
                GameInput::Quit => frame.quit = true,
            }
        }
        frame
    }

    /// Pressed directions in the order they are applied to the game.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.pressed[direction.check_index()])
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps one key event to a game input.
///
/// Only fresh presses count: repeat and release events are dropped. Terminals
/// only label autorepeat as [`KeyEventKind::Repeat`] once the session has
/// enabled key event types (see `TerminalSession::enter`). Where the terminal
/// lacks that support, an OS autorepeat arrives as another press and a held
/// key does retrigger.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            .then_some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            GameInput::Direction(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameInput::Direction(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameInput::Direction(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameInput::Direction(Direction::Right)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Non-blocking reader for terminal key events.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::ZERO,
        }
    }
}

impl InputHandler {
    /// Drains every event already queued by the terminal into one frame.
    pub fn poll_frame(&mut self) -> io::Result<FrameInput> {
        let mut inputs = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key_event(key) {
                    inputs.push(input);
                }
            }
        }

        Ok(FrameInput::collect(inputs))
    }
}
