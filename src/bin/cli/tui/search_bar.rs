use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;
use super::theme::Theme;

/// Filter input line; the tree itself shows the matches
pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    let matches = state
        .tree_items
        .iter()
        .filter(|item| item.depth == 0)
        .count();

    let line = Line::from(vec![
        Span::styled(format!("/{}", state.search_input), Style::default().fg(theme.card)),
        Span::styled(
            format!("   {} categor{}", matches, if matches == 1 { "y" } else { "ies" }),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(line).style(theme.base()), area);

    let cursor_x = area.x + 1 + state.search_input.chars().count() as u16;
    f.set_cursor_position(Position::new(cursor_x.min(area.x + area.width.saturating_sub(1)), area.y));
}
