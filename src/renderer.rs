use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType};

use crate::config::{
    BOARD_MARGIN_X, CELL_HEIGHT, CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE, GridSize, SCORE_ROWS,
    TITLE_ROWS, Theme, required_terminal_size,
};
use crate::game::Game;
use crate::snake::Cell;
use crate::ui::hud::{render_score, render_title};
use crate::ui::menu::render_game_over_menu;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardLayout {
    pub title: Rect,
    /// Board including its border.
    pub board: Rect,
    pub score: Rect,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(theme.background)), area);

    let layout = board_layout(area, game.bounds());
    render_title(frame, layout.title, theme);

    let block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(theme.border).bg(theme.background));
    let inner = block.inner(layout.board);
    frame.render_widget(block, layout.board);

    render_food(frame, inner, game, theme);
    render_snake(frame, inner, game, theme);
    render_score(frame, layout.score, game.score(), theme);

    if !game.is_running() {
        render_game_over_menu(frame, layout.board, game.last_run(), theme);
    }
}

/// Centers the title, board and score rows inside `area`.
#[must_use]
pub fn board_layout(area: Rect, bounds: GridSize) -> BoardLayout {
    let (width, height) = required_terminal_size(bounds);
    let canvas = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let [title, board, score] = Layout::vertical([
        Constraint::Length(TITLE_ROWS),
        Constraint::Length(bounds.height * CELL_HEIGHT + 2),
        Constraint::Length(SCORE_ROWS),
    ])
    .areas(canvas);

    BoardLayout {
        title: inset_horizontal(title, BOARD_MARGIN_X),
        board: inset_horizontal(board, BOARD_MARGIN_X),
        score: inset_horizontal(score, BOARD_MARGIN_X),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, game.bounds(), game.food().position()) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).bg(theme.background),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let style = Style::new().fg(theme.snake).bg(theme.background);

    let buffer = frame.buffer_mut();
    for segment in game.snake().segments() {
        let Some((x, y)) = cell_to_terminal(inner, game.bounds(), *segment) else {
            continue;
        };

        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Maps a grid cell to the terminal position of its top-left column.
///
/// Returns `None` for cells outside the grid or outside the visible board.
#[must_use]
pub fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?.checked_mul(CELL_HEIGHT)?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let width = area.width.saturating_sub(margin.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(margin.min(area.width)),
        width,
        ..area
    }
}
