use std::time::Duration;

use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Cell;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid with `cells` cells per side.
    #[must_use]
    pub const fn square(cells: u16) -> Self {
        Self {
            width: cells,
            height: cells,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Cells per side of the playing field.
pub const GRID_CELLS: u16 = 25;

/// The playing field every game uses.
pub const GRID: GridSize = GridSize::square(GRID_CELLS);

/// Terminal columns drawn per grid cell. Two columns keep cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Terminal rows drawn per grid cell.
pub const CELL_HEIGHT: u16 = 1;

/// Columns between the terminal edge and the board border.
pub const BOARD_MARGIN_X: u16 = 2;

/// Rows reserved above the board for the title.
pub const TITLE_ROWS: u16 = 2;

/// Rows reserved below the board for the score line.
pub const SCORE_ROWS: u16 = 1;

/// Title shown above the board and on the terminal window.
pub const WINDOW_TITLE: &str = "Retro Snake";

/// Interval between simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Sleep between rendered frames (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Body the snake starts with and returns to after every death, head first.
pub const START_BODY: [Cell; 3] = [
    Cell { x: 6, y: 9 },
    Cell { x: 5, y: 9 },
    Cell { x: 4, y: 9 },
];

/// Direction the snake starts with and returns to after every death.
pub const START_DIRECTION: Direction = Direction::Right;

/// Board glyph for one snake segment (one cell wide).
pub const GLYPH_SNAKE: &str = "██";

/// Board glyph for food (one cell wide).
pub const GLYPH_FOOD: &str = "▐▌";

/// Returns the smallest terminal `(columns, rows)` that fits the whole board.
#[must_use]
pub fn required_terminal_size(bounds: GridSize) -> (u16, u16) {
    let board_width = bounds.width * CELL_WIDTH + 2;
    let board_height = bounds.height * CELL_HEIGHT + 2;

    (
        board_width + 2 * BOARD_MARGIN_X,
        TITLE_ROWS + board_height + SCORE_ROWS,
    )
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub snake: Color,
    pub food: Color,
    pub text: Color,
}

/// Pale green field with dark green snake and text.
pub const THEME_RETRO: Theme = Theme {
    background: Color::Rgb(173, 204, 96),
    border: Color::Rgb(43, 51, 24),
    snake: Color::Rgb(43, 51, 24),
    food: Color::Rgb(226, 181, 36),
    text: Color::Rgb(43, 51, 24),
};
