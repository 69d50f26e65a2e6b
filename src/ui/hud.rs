use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::{Theme, WINDOW_TITLE};

/// Draws the game title left-aligned in `area`.
pub fn render_title(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(WINDOW_TITLE))
            .alignment(Alignment::Left)
            .style(
                Style::new()
                    .fg(theme.text)
                    .bg(theme.background)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

/// Draws the running score left-aligned in `area`.
pub fn render_score(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(score_line(score))
            .alignment(Alignment::Left)
            .style(Style::new().fg(theme.text).bg(theme.background)),
        area,
    );
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(format!("Score: {score}"))
}
