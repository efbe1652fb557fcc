use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app_state::{Mode, Screen, TuiState};
use super::theme::Theme;
use super::{
    add_card_form, content_widget, login_widget, search_bar, settings_panel, splash_widget,
    status_bar, tree_widget,
};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();
    let theme = Theme::from_settings(&state.display);

    match state.screen {
        Screen::Splash => {
            splash_widget::draw(f, size, state, &theme);
            return;
        }
        Screen::Login => {
            login_widget::draw(f, size, state, &theme);
            return;
        }
        Screen::Catalog => {}
    }

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    // Horizontal split: tree (35%) | card (65%)
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(main_area);

    let tree_area = panels[0];
    let content_area = panels[1];

    // Save areas for mouse hit-testing
    state.tree_area = Some(tree_area);
    state.content_area = Some(content_area);

    tree_widget::draw(f, tree_area, state, &theme);
    content_widget::draw(f, content_area, state, &theme);

    match state.mode {
        Mode::Search => search_bar::draw(f, status_area, state, &theme),
        _ => status_bar::draw(f, status_area, state, &theme),
    }

    // Popups over the main panels
    match state.mode {
        Mode::AddCard => add_card_form::draw(f, main_area, state, &theme),
        Mode::Settings => settings_panel::draw(f, main_area, state, &theme),
        _ => {}
    }
}
