use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use annoncard_lib::splash::START_SCALE;

use super::app_state::TuiState;
use super::theme::Theme;

/// Logo size in cells at scale 1.0
const LOGO_WIDTH: f32 = 44.0;
const LOGO_HEIGHT: f32 = 11.0;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    f.render_widget(Block::default().style(theme.base()), area);

    let scale = state
        .splash
        .as_ref()
        .map(|splash| splash.scale(Instant::now()))
        .unwrap_or(START_SCALE);
    let logo = logo_rect(area, scale);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.card))
        .style(Style::default().bg(theme.card).fg(theme.card_text));

    let mut lines = vec![Line::from(""); logo.height.saturating_sub(4) as usize / 2];
    lines.push(Line::from(Span::styled("AnnonCard", Style::default().add_modifier(Modifier::BOLD))));
    lines.push(Line::from("Learn, Grow"));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, logo);

    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(2),
        width: area.width,
        height: 1u16.min(area.height),
    };
    let hint = Paragraph::new("press any key to skip")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim));
    f.render_widget(hint, hint_area);
}

/// Centered logo box, scaled and clipped to the area
fn logo_rect(area: Rect, scale: f32) -> Rect {
    let width = ((LOGO_WIDTH * scale).round() as u16).min(area.width);
    let height = ((LOGO_HEIGHT * scale).round() as u16).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
