use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::app_state::{LoginField, TuiState};
use super::theme::Theme;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    f.render_widget(Block::default().style(theme.base()), area);

    let width = 44u16.min(area.width);
    let height = 9u16.min(area.height);
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.card))
        .style(theme.base());

    let form = &state.login;
    let field = |field: LoginField, label: &str, value: String| {
        let focused = form.focus == field;
        let style = if focused {
            Style::default().fg(theme.card).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let cursor = if focused { "\u{2588}" } else { "" };
        Line::from(vec![
            Span::styled(format!(" {:<10}", label), style),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(theme.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        field(LoginField::Username, "Username", form.username.clone()),
        Line::from(""),
        field(LoginField::Password, "Password", mask(&form.password)),
        Line::from(""),
        Line::from(Span::styled(
            " Tab: switch field  Enter: log in  Esc: quit",
            Style::default().fg(theme.dim),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), form_area);
}

/// One bullet per character of the password
fn mask(password: &str) -> String {
    "\u{2022}".repeat(password.chars().count())
}
