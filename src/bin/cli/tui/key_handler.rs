use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::add_card_form::AddField;
use super::app_state::{Mode, Screen, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.quit = true;
        return;
    }

    match state.screen {
        Screen::Splash => state.skip_splash(),
        Screen::Login => handle_login_key(state, key),
        Screen::Catalog => {
            // Clear flash message on any keypress
            state.flash_message = None;

            match state.mode {
                Mode::Tree => handle_tree_key(state, key),
                Mode::Overview => handle_overview_key(state, key),
                Mode::Search => handle_search_key(state, key),
                Mode::AddCard => handle_add_card_key(state, key),
                Mode::Settings => handle_settings_key(state, key),
            }
        }
    }
}

fn handle_login_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => state.login.toggle_focus(),
        KeyCode::Enter => state.submit_login(),
        KeyCode::Backspace => {
            state.login.input_mut().pop();
        }
        KeyCode::Char(c) => state.login.input_mut().push(c),
        _ => {}
    }
}

fn handle_tree_key(state: &mut TuiState, key: KeyEvent) {
    // Handle pending 'g' key
    if state.pending_key == Some('g') {
        state.pending_key = None;
        if key.code == KeyCode::Char('g') {
            state.tree_go_top();
            return;
        }
        // Not 'gg', ignore
    }

    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.tree_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.tree_move_up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => state.activate_selected(),
        KeyCode::Char('h') | KeyCode::Left => state.collapse_or_parent(),
        KeyCode::Char(' ') => state.flip_selected(),
        KeyCode::Char('d') | KeyCode::Delete => state.delete_selected_card(),
        KeyCode::Char('g') => {
            state.pending_key = Some('g');
        }
        KeyCode::Char('G') => state.tree_go_bottom(),
        KeyCode::Char('/') => state.start_search(),
        KeyCode::Char('a') => state.open_add_form(),
        KeyCode::Char('s') => state.open_settings(),
        KeyCode::Char('o') => state.toggle_overview(),
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        KeyCode::Esc => {
            state.show_help = false;
        }
        _ => {}
    }
}

fn handle_overview_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('o') | KeyCode::Esc => state.toggle_overview(),
        KeyCode::Char('j') | KeyCode::Down => state.tree_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.tree_move_up(),
        _ => {}
    }
}

fn handle_search_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_search(),
        KeyCode::Enter => state.confirm_search(),
        KeyCode::Backspace => {
            state.search_input.pop();
            state.update_search();
        }
        KeyCode::Down => state.tree_move_down(),
        KeyCode::Up => state.tree_move_up(),
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.update_search();
        }
        _ => {}
    }
}

fn handle_add_card_key(state: &mut TuiState, key: KeyEvent) {
    let Some(form) = state.add_form.as_mut() else {
        state.mode = Mode::Tree;
        return;
    };

    match key.code {
        KeyCode::Esc => state.cancel_add_form(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left if form.focus == AddField::Category => form.cycle_choice(-1),
        KeyCode::Right if form.focus == AddField::Category => form.cycle_choice(1),
        KeyCode::Enter if form.focus == AddField::Image && !form.image_path.trim().is_empty() => {
            let message = if form.attach_image() {
                "Image attached"
            } else {
                "Could not load image"
            };
            form.image_path.clear();
            state.flash_message = Some(message.to_string());
        }
        KeyCode::Enter => state.submit_add_form(),
        KeyCode::Backspace => {
            if let Some(input) = form.input_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = form.input_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_settings_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s') => state.close_settings(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => state.settings_move(1),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => state.settings_move(-1),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => state.settings_adjust(1),
        KeyCode::Char('h') | KeyCode::Left => state.settings_adjust(-1),
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if state.screen != Screen::Catalog || !matches!(state.mode, Mode::Tree | Mode::Overview) {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let col = mouse.column;
            let row = mouse.row;

            // Check if click is in tree panel
            if let Some(area) = state.tree_area {
                if col >= area.x && col < area.x + area.width
                    && row >= area.y && row < area.y + area.height
                {
                    // Calculate which item was clicked (account for border)
                    let inner_row = row.saturating_sub(area.y + 1);
                    let clicked_idx = state.tree_state.offset() + inner_row as usize;

                    if clicked_idx < state.tree_items.len() {
                        if state.tree_state.selected() == Some(clicked_idx) {
                            // Click same item again: expand/collapse or flip
                            state.activate_selected();
                        } else {
                            state.tree_state.select(Some(clicked_idx));
                        }
                    }
                    return;
                }
            }

            // Clicking the card flips it
            if let Some(area) = state.content_area {
                if col >= area.x && col < area.x + area.width
                    && row >= area.y && row < area.y + area.height
                {
                    state.flip_selected();
                }
            }
        }
        MouseEventKind::ScrollDown => state.tree_move_down(),
        MouseEventKind::ScrollUp => state.tree_move_up(),
        _ => {}
    }
}
