use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::{DeathReason, RunSummary};

/// Draws the game-over screen as a centered popup over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    last_run: Option<RunSummary>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let style = Style::new().fg(theme.text).bg(theme.background);
    frame.render_widget(
        Paragraph::new(game_over_lines(last_run))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .title(" game over ")
                    .border_style(style.add_modifier(Modifier::BOLD)),
            ),
        popup,
    );
}

fn game_over_lines(last_run: Option<RunSummary>) -> Vec<Line<'static>> {
    let (score, cause) = match last_run {
        Some(RunSummary { score, reason }) => (
            score,
            match reason {
                DeathReason::WallCollision => "Cause: hit wall",
                DeathReason::SelfCollision => "Cause: hit yourself",
            },
        ),
        None => (0, ""),
    };

    vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(cause),
        Line::from(""),
        Line::from("Arrows/WASD Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ]
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
