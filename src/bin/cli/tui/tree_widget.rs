use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use super::app_state::{Mode, TreeItemKind, TuiState};
use super::theme::Theme;

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState, theme: &Theme) {
    let is_active = matches!(state.mode, Mode::Tree | Mode::Search);

    let title = if state.search_input.is_empty() {
        " Categories ".to_string()
    } else {
        format!(" Categories /{} ", state.search_input)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(theme.base())
        .border_style(if is_active {
            Style::default().fg(theme.card)
        } else {
            Style::default().fg(theme.dim)
        });

    let items: Vec<ListItem> = if state.tree_items.is_empty() {
        let text = if state.search_input.is_empty() {
            "  No cards yet. Press a to add one."
        } else {
            "  No matches"
        };
        vec![ListItem::new(text).style(Style::default().fg(theme.dim))]
    } else {
        state.tree_items.iter().map(|item| {
            let indent = "  ".repeat(item.depth);

            match &item.kind {
                TreeItemKind::Category { .. } => {
                    let arrow = if item.expanded { "\u{25be} " } else { "\u{25b8} " };
                    let line = Line::from(vec![
                        Span::raw(format!("{}{}", indent, arrow)),
                        Span::styled(item.label.clone(), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
                        Span::styled(format!(" ({})", item.card_count), Style::default().fg(theme.dim)),
                    ]);
                    ListItem::new(line)
                }
                TreeItemKind::Card { .. } => {
                    let text = format!("{}\u{2022} {}", indent, item.label);
                    ListItem::new(text).style(Style::default().fg(theme.card))
                }
            }
        }).collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if is_active { theme.highlight } else { theme.bg })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state.tree_state);
}
