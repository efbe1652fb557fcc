use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};
use super::theme::Theme;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(theme.card).fg(theme.card_text));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.mode {
        Mode::Tree => " j/k: move  Enter: open  Space: flip  a: add  d: delete  /: filter  s: settings  ?: help  q: quit ",
        Mode::Overview => " o/Esc: back  j/k: move  q: quit ",
        Mode::AddCard => " Adding card ",
        Mode::Settings => " Settings ",
        Mode::Search => " Type to filter  Enter: keep  Esc: clear ",
    };

    let user = state
        .session
        .user()
        .map(|u| format!(" {} ", u))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::raw(hints),
        Span::styled(user, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let status = Paragraph::new(line)
        .style(Style::default().bg(theme.highlight).fg(theme.fg));
    f.render_widget(status, area);
}
