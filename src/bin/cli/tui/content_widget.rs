use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use annoncard_lib::flashcards::{Card, Catalog};

use super::app_state::{card_label, Mode, TuiState};
use super::theme::Theme;
use crate::commands::show::card_width;
use crate::render::terminal::{face_text, wrap_lines};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    let title = match state.selected_category() {
        _ if state.mode == Mode::Overview => " Categories ".to_string(),
        Some(category) => format!(" {} ", category),
        None => " Card ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(theme.base())
        .border_style(if state.mode == Mode::Overview {
            Style::default().fg(theme.card)
        } else {
            Style::default().fg(theme.dim)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.show_help {
        draw_help(f, inner, theme);
        return;
    }

    if state.mode == Mode::Overview {
        draw_overview(f, inner, state, theme);
        return;
    }

    match state.selected_card() {
        Some((_, index, card)) => draw_single(f, inner, state, theme, card, index),
        None => draw_category_summary(f, inner, state, theme),
    }
}

fn draw_single(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme, card: &Card, index: usize) {
    let flipped = state.is_flipped(card);
    let width = card_width(state.display.font_size) as u16;
    let rect = card_rect(area, width, face_lines(card, flipped, width).len() as u16 + 2);
    draw_card(f, rect, card, flipped, index + 1, theme);

    let side = if flipped { "Back" } else { "Front" };
    let hint_y = rect.y + rect.height + 1;
    if hint_y < area.y + area.height {
        let hint = Paragraph::new(format!("{}  (Space: flip  d: delete)", side))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dim));
        f.render_widget(hint, Rect { y: hint_y, height: 1, ..area });
    }
}

/// Row of the whole-catalog overview
#[derive(Debug, Clone, PartialEq, Eq)]
enum OverviewRow {
    Header { name: String, count: usize },
    Topic(String),
    Gap,
}

/// Every category as a section listing its topics, honoring the current filter
fn overview_rows(catalog: &Catalog, query: &str) -> Vec<OverviewRow> {
    let mut rows = Vec::new();
    for category in catalog.filter(query) {
        if !rows.is_empty() {
            rows.push(OverviewRow::Gap);
        }
        rows.push(OverviewRow::Header {
            name: category.name.to_string(),
            count: category.card_count(),
        });
        rows.extend(category.cards.iter().map(|card| OverviewRow::Topic(card_label(card))));
    }
    rows
}

fn draw_overview(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    let rows = overview_rows(&state.app.catalog, &state.search_input);
    if rows.is_empty() {
        draw_empty_hint(f, area, theme, "No categories to show.");
        return;
    }

    // Scroll so the selected category's section starts on screen
    let selected = state.selected_category();
    let start = rows
        .iter()
        .position(|row| matches!(row, OverviewRow::Header { name, .. } if Some(name.as_str()) == selected))
        .unwrap_or(0);
    let skip = if start < area.height as usize { 0 } else { start };

    let lines: Vec<Line> = rows
        .into_iter()
        .skip(skip)
        .map(|row| match row {
            OverviewRow::Header { name, count } => {
                let style = if Some(name.as_str()) == selected {
                    Style::default().fg(theme.card).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::styled(format!(" {}", name), style),
                    Span::styled(format!(" ({})", count), Style::default().fg(theme.dim)),
                ])
            }
            OverviewRow::Topic(topic) => Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format!(" {} ", topic),
                    Style::default().bg(theme.card).fg(theme.card_text),
                ),
            ]),
            OverviewRow::Gap => Line::from(""),
        })
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_category_summary(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    let Some(category) = state.selected_category() else {
        draw_empty_hint(f, area, theme, "Select a category from the tree.");
        return;
    };
    let cards = state.app.catalog.cards(category).unwrap_or_default();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} card{}", cards.len(), if cards.len() == 1 { "" } else { "s" }),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(cards.iter().enumerate().map(|(i, card)| {
        Line::from(vec![
            Span::styled(format!("  {:>3}. ", i + 1), Style::default().fg(theme.dim)),
            Span::styled(card_label(card), Style::default().fg(theme.card)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter: expand/collapse  o: overview  a: add card",
        Style::default().fg(theme.dim),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_empty_hint(f: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", text), Style::default().fg(theme.dim))),
        Line::from(""),
        Line::from(Span::styled(
            "  Navigate with j/k, expand with Enter or l.",
            Style::default().fg(theme.dim),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let keys = [
        ("j/k", "move down/up"),
        ("gg/G", "first/last row"),
        ("Enter/l", "expand category or flip card"),
        ("h", "collapse or go to category"),
        ("Space", "flip card"),
        ("d", "delete card"),
        ("/", "filter categories and topics"),
        ("a", "add card"),
        ("s", "settings"),
        ("o", "overview of all categories"),
        ("?", "toggle help"),
        ("q", "quit"),
    ];

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Keys", Style::default().fg(theme.card).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    lines.extend(keys.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
            Span::styled(*action, Style::default().fg(theme.dim)),
        ])
    }));
    f.render_widget(Paragraph::new(lines), area);
}

fn face_lines(card: &Card, flipped: bool, width: u16) -> Vec<String> {
    let text = face_text(card.face(flipped));
    let lines = wrap_lines(&text, "", width.saturating_sub(4) as usize);
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn draw_card(f: &mut Frame, rect: Rect, card: &Card, flipped: bool, number: usize, theme: &Theme) {
    let block = Block::default()
        .title(format!(" #{} ", number))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(theme.card).fg(theme.card_text));

    let lines: Vec<Line> = face_lines(card, flipped, rect.width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().add_modifier(Modifier::BOLD))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, rect);
}

/// Center a card box in the area, shrinking it to fit
fn card_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 3,
        width,
        height,
    }
}
