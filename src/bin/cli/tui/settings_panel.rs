use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use annoncard_lib::settings::{MAX_FONT_SIZE, MIN_FONT_SIZE};

use super::app_state::{SettingsRow, TuiState};
use super::theme::{card_color, Theme};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    let width = 48u16.min(area.width);
    let height = 11u16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card))
        .style(theme.base());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let display = &state.display;
    let items: Vec<ListItem> = SettingsRow::ALL.iter().map(|row| {
        let (label, value) = match row {
            SettingsRow::DarkMode => (
                "Dark mode",
                Span::raw(if display.dark_mode { "on" } else { "off" }),
            ),
            SettingsRow::FontSize => (
                "Font size",
                Span::raw(format!(
                    "{:.0}  ({:.0}-{:.0})",
                    display.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
                )),
            ),
            SettingsRow::CardColor => (
                "Card color",
                Span::styled(
                    format!("\u{2588}\u{2588} {}", display.card_color.name()),
                    Style::default().fg(card_color(display.card_color)),
                ),
            ),
        };
        ListItem::new(Line::from(vec![
            Span::styled(format!(" {:<12}", label), Style::default().fg(theme.fg)),
            value,
        ]))
    }).collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.highlight).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.settings_selected));

    let list_area = Rect { height: inner.height.saturating_sub(2), y: inner.y + 1, ..inner };
    f.render_stateful_widget(list, list_area, &mut list_state);

    let hint_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1u16.min(inner.height),
        ..inner
    };
    let hint = Paragraph::new(" j/k: select  h/l: change  Esc: close")
        .style(Style::default().fg(theme.dim));
    f.render_widget(hint, hint_area);
}
