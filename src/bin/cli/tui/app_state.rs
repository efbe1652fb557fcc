use std::collections::HashSet;
use std::time::Instant;

use anyhow::Result;
use ratatui::prelude::Rect;
use ratatui::widgets::ListState;
use uuid::Uuid;

use annoncard_lib::flashcards::{Card, ExpandedSet};
use annoncard_lib::session::SessionGate;
use annoncard_lib::settings::DisplaySettings;
use annoncard_lib::splash::{self, Splash};

use super::add_card_form::AddCardForm;
use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tree,
    Search,
    AddCard,
    Settings,
    Overview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn input_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

/// Rows of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DarkMode,
    FontSize,
    CardColor,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [SettingsRow::DarkMode, SettingsRow::FontSize, SettingsRow::CardColor];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeItemKind {
    Category { name: String },
    Card { category: String, index: usize, id: Uuid },
}

#[derive(Debug, Clone)]
pub struct TreeItem {
    pub label: String,
    pub kind: TreeItemKind,
    pub depth: usize,
    pub expanded: bool,
    pub card_count: usize,
}

pub struct TuiState {
    pub app: App,
    pub screen: Screen,
    pub mode: Mode,

    // Splash, dropped once the login screen is shown
    pub splash: Option<Splash>,

    // Login state
    pub login: LoginForm,
    pub session: SessionGate,

    // Display settings snapshot, refreshed on every change
    pub display: DisplaySettings,
    pub settings_selected: usize,

    // Tree state
    pub tree_items: Vec<TreeItem>,
    pub tree_state: ListState,
    pub expanded: ExpandedSet,
    pub flipped: HashSet<Uuid>,

    // Search filter, applied to the tree while typing
    pub search_input: String,

    pub add_form: Option<AddCardForm>,

    // Key state for multi-char sequences
    pub pending_key: Option<char>,

    // Panel areas for mouse hit-testing (updated each draw)
    pub tree_area: Option<Rect>,
    pub content_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Result<Self> {
        let audio = splash::open_intro_audio(&app.assets_dir(), app.config.splash.audio);
        let splash = Splash::start(app.config.splash.duration(), audio);
        let display = app.settings.load();

        let mut state = Self {
            app,
            screen: Screen::Splash,
            mode: Mode::Tree,
            splash: Some(splash),
            login: LoginForm::default(),
            session: SessionGate::new(),
            display,
            settings_selected: 0,
            tree_items: Vec::new(),
            tree_state: ListState::default(),
            expanded: ExpandedSet::new(),
            flipped: HashSet::new(),
            search_input: String::new(),
            add_form: None,
            pending_key: None,
            tree_area: None,
            content_area: None,
            flash_message: None,
            show_help: false,
            quit: false,
        };

        state.rebuild_tree();
        Ok(state)
    }

    // ==================== Splash & Login ====================

    /// Advance timers; called on every loop iteration
    pub fn tick(&mut self, now: Instant) {
        if self.screen != Screen::Splash {
            return;
        }
        if let Some(splash) = self.splash.as_mut() {
            if splash.poll(now) {
                self.enter_login();
            }
        }
    }

    pub fn skip_splash(&mut self) {
        if let Some(splash) = self.splash.as_mut() {
            splash.skip();
        }
        self.enter_login();
    }

    fn enter_login(&mut self) {
        // Dropping the splash stops any audio still playing
        self.splash = None;
        self.screen = Screen::Login;
    }

    /// Submit the login form. A refused attempt keeps the login screen up.
    pub fn submit_login(&mut self) {
        if self.session.attempt_login(&self.login.username, &self.login.password) {
            self.login.password.clear();
            self.screen = Screen::Catalog;
            self.mode = Mode::Tree;
            self.rebuild_tree();
        }
    }

    // ==================== Tree ====================

    pub fn rebuild_tree(&mut self) {
        let previous = self.selected_item().map(|item| item.kind.clone());
        self.tree_items.clear();

        for category in self.app.catalog.filter(&self.search_input) {
            let expanded = self.expanded.is_expanded(category.name);
            self.tree_items.push(TreeItem {
                label: category.name.to_string(),
                kind: TreeItemKind::Category { name: category.name.to_string() },
                depth: 0,
                expanded,
                card_count: category.card_count(),
            });

            if expanded {
                for (index, card) in category.cards.iter().enumerate() {
                    self.tree_items.push(TreeItem {
                        label: card_label(card),
                        kind: TreeItemKind::Card {
                            category: category.name.to_string(),
                            index,
                            id: card.id,
                        },
                        depth: 1,
                        expanded: false,
                        card_count: 0,
                    });
                }
            }
        }

        let selected = previous
            .and_then(|kind| self.position_of(&kind))
            .or_else(|| self.tree_state.selected())
            .map(|idx| idx.min(self.tree_items.len().saturating_sub(1)));
        self.tree_state.select(if self.tree_items.is_empty() { None } else { selected.or(Some(0)) });
    }

    /// Find an item by identity; cards match by id since indices shift on delete
    fn position_of(&self, kind: &TreeItemKind) -> Option<usize> {
        self.tree_items.iter().position(|item| match (&item.kind, kind) {
            (TreeItemKind::Card { id: a, .. }, TreeItemKind::Card { id: b, .. }) => a == b,
            (a, b) => a == b,
        })
    }

    pub fn tree_selected(&self) -> usize {
        self.tree_state.selected().unwrap_or(0)
    }

    pub fn selected_item(&self) -> Option<&TreeItem> {
        self.tree_state.selected().and_then(|idx| self.tree_items.get(idx))
    }

    /// Category of the selected item (the card's category for card rows)
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_item().map(|item| match &item.kind {
            TreeItemKind::Category { name } => name.as_str(),
            TreeItemKind::Card { category, .. } => category.as_str(),
        })
    }

    pub fn selected_card(&self) -> Option<(&str, usize, &Card)> {
        match &self.selected_item()?.kind {
            TreeItemKind::Card { category, index, .. } => {
                let card = self.app.catalog.get(category, *index)?;
                Some((category.as_str(), *index, card))
            }
            TreeItemKind::Category { .. } => None,
        }
    }

    pub fn is_flipped(&self, card: &Card) -> bool {
        self.flipped.contains(&card.id)
    }

    /// Expand/collapse a category row, or flip a card row
    pub fn activate_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        match item.kind.clone() {
            TreeItemKind::Category { name } => {
                self.expanded.toggle(&name);
                self.rebuild_tree();
            }
            TreeItemKind::Card { .. } => self.flip_selected(),
        }
    }

    pub fn flip_selected(&mut self) {
        let Some(id) = self.selected_card().map(|(_, _, card)| card.id) else {
            return;
        };
        if !self.flipped.remove(&id) {
            self.flipped.insert(id);
        }
    }

    pub fn collapse_or_parent(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        match item.kind.clone() {
            TreeItemKind::Category { name } => {
                if item.expanded {
                    self.expanded.toggle(&name);
                    self.rebuild_tree();
                }
            }
            TreeItemKind::Card { category, .. } => {
                let parent = TreeItemKind::Category { name: category };
                if let Some(idx) = self.position_of(&parent) {
                    self.tree_state.select(Some(idx));
                }
            }
        }
    }

    /// Delete the selected card. Does nothing on category rows.
    pub fn delete_selected_card(&mut self) {
        let Some((category, index, card)) = self.selected_card() else {
            return;
        };
        let (category, id, topic) = (category.to_string(), card.id, card_label(card));

        if self.app.catalog.delete_card(&category, index).is_some() {
            self.flipped.remove(&id);
            self.expanded.retain_existing(&self.app.catalog);
            if !self.app.catalog.contains(&category) {
                // Move the selection onto whatever takes the category's place
                let parent = TreeItemKind::Category { name: category };
                if let Some(idx) = self.position_of(&parent) {
                    self.tree_state.select(Some(idx));
                }
            }
            self.rebuild_tree();
            self.flash_message = Some(format!("Deleted \"{}\"", topic));
        }
    }

    pub fn tree_move_down(&mut self) {
        if !self.tree_items.is_empty() && self.tree_selected() < self.tree_items.len() - 1 {
            self.tree_state.select(Some(self.tree_selected() + 1));
        }
    }

    pub fn tree_move_up(&mut self) {
        if self.tree_selected() > 0 {
            self.tree_state.select(Some(self.tree_selected() - 1));
        }
    }

    pub fn tree_go_top(&mut self) {
        if !self.tree_items.is_empty() {
            self.tree_state.select(Some(0));
        }
    }

    pub fn tree_go_bottom(&mut self) {
        if !self.tree_items.is_empty() {
            self.tree_state.select(Some(self.tree_items.len() - 1));
        }
    }

    // ==================== Search ====================

    pub fn start_search(&mut self) {
        self.mode = Mode::Search;
    }

    pub fn update_search(&mut self) {
        // Jump to the first match
        self.tree_state.select(None);
        self.rebuild_tree();
    }

    /// Leave search mode and keep the filter applied
    pub fn confirm_search(&mut self) {
        self.mode = Mode::Tree;
    }

    pub fn cancel_search(&mut self) {
        self.mode = Mode::Tree;
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.rebuild_tree();
        }
    }

    // ==================== Add card ====================

    pub fn open_add_form(&mut self) {
        let choices: Vec<String> = self.app.catalog.categories().map(String::from).collect();
        let preselect = self.selected_category().map(String::from);
        self.add_form = Some(AddCardForm::new(choices, preselect.as_deref()));
        self.mode = Mode::AddCard;
    }

    pub fn cancel_add_form(&mut self) {
        self.add_form = None;
        self.mode = Mode::Tree;
    }

    /// Save the form. Incomplete cards are dropped without a message.
    pub fn submit_add_form(&mut self) {
        let Some(form) = self.add_form.take() else {
            return;
        };
        self.mode = Mode::Tree;

        let draft = form.into_draft();
        let category = draft.choice.resolve().to_string();
        let added = draft.submit(&mut self.app.catalog).map(|card| (card.id, card_label(card)));

        if let Some((id, label)) = added {
            if !self.expanded.is_expanded(&category) {
                self.expanded.toggle(&category);
            }
            self.rebuild_tree();
            let target = TreeItemKind::Card { category, index: 0, id };
            if let Some(idx) = self.position_of(&target) {
                self.tree_state.select(Some(idx));
            }
            self.flash_message = Some(format!("Added \"{}\"", label));
        }
    }

    // ==================== Settings ====================

    pub fn open_settings(&mut self) {
        self.display = self.app.settings.load();
        self.settings_selected = 0;
        self.mode = Mode::Settings;
    }

    pub fn settings_move(&mut self, delta: isize) {
        let len = SettingsRow::ALL.len() as isize;
        self.settings_selected = (self.settings_selected as isize + delta).rem_euclid(len) as usize;
    }

    pub fn selected_settings_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.settings_selected.min(SettingsRow::ALL.len() - 1)]
    }

    /// Change the selected setting one step and persist it immediately
    pub fn settings_adjust(&mut self, delta: i32) {
        let row = self.selected_settings_row();
        let settings = &mut self.app.settings;
        let result = match row {
            SettingsRow::DarkMode => settings.set_dark_mode(!self.display.dark_mode),
            SettingsRow::FontSize => settings
                .set_font_size(self.display.font_size.round() + f64::from(delta))
                .map(|_| ()),
            SettingsRow::CardColor => {
                let color = if delta >= 0 {
                    self.display.card_color.next()
                } else {
                    self.display.card_color.prev()
                };
                settings.set_card_color(color)
            }
        };

        if let Err(e) = result {
            log::warn!("Failed to save settings: {}", e);
            self.flash_message = Some(format!("Error: {}", e));
        }
        self.display = self.app.settings.load();
    }

    pub fn close_settings(&mut self) {
        self.mode = Mode::Tree;
    }

    // ==================== Overview ====================

    pub fn toggle_overview(&mut self) {
        self.mode = if self.mode == Mode::Overview { Mode::Tree } else { Mode::Overview };
    }
}

/// Tree label for a card: its topic, or the image name for image-only cards
pub fn card_label(card: &Card) -> String {
    if !card.topic.is_empty() {
        card.topic.clone()
    } else if let Some(image) = &card.image {
        format!("[{}]", image.name)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use annoncard_lib::config::AppConfig;
    use annoncard_lib::palette::CardColor;
    use annoncard_lib::flashcards::Catalog;
    use annoncard_lib::settings::SettingsStore;
    use tempfile::TempDir;

    fn state() -> (TempDir, TuiState) {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.splash.audio = false;
        let app = App {
            data_dir: dir.path().to_path_buf(),
            config,
            settings: SettingsStore::open(dir.path()).unwrap(),
            catalog: Catalog::seeded(),
        };
        (dir, TuiState::new(app).unwrap())
    }

    fn logged_in() -> (TempDir, TuiState) {
        let (dir, mut state) = state();
        state.skip_splash();
        state.login.username = "anna".to_string();
        state.login.password = "geheim".to_string();
        state.submit_login();
        (dir, state)
    }

    fn select_category(state: &mut TuiState, name: &str) {
        let idx = state
            .position_of(&TreeItemKind::Category { name: name.to_string() })
            .unwrap();
        state.tree_state.select(Some(idx));
    }

    #[test]
    fn test_splash_times_out_into_login() {
        let (_dir, mut state) = state();
        assert_eq!(state.screen, Screen::Splash);
        state.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(state.screen, Screen::Login);
        assert!(state.splash.is_none());
    }

    #[test]
    fn test_refused_login_stays_on_login() {
        let (_dir, mut state) = state();
        state.skip_splash();
        state.login.username = "anna".to_string();
        state.submit_login();
        assert_eq!(state.screen, Screen::Login);
        assert!(!state.session.is_logged_in());
    }

    #[test]
    fn test_login_shows_collapsed_catalog() {
        let (_dir, state) = logged_in();
        assert_eq!(state.screen, Screen::Catalog);
        assert!(state.login.password.is_empty());
        let labels: Vec<&str> = state.tree_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["2. Weltkrieg", "Mathematik"]);
    }

    #[test]
    fn test_expand_and_flip_card() {
        let (_dir, mut state) = logged_in();
        select_category(&mut state, "Mathematik");
        state.activate_selected();
        assert_eq!(state.tree_items.len(), 3);

        state.tree_move_down();
        let (_, _, card) = state.selected_card().unwrap();
        assert_eq!(card.topic, "Was ist Pi?");
        assert!(!state.is_flipped(card));

        state.activate_selected();
        let (_, _, card) = state.selected_card().unwrap();
        assert!(state.is_flipped(card));
    }

    #[test]
    fn test_collapse_from_card_goes_to_parent() {
        let (_dir, mut state) = logged_in();
        select_category(&mut state, "Mathematik");
        state.activate_selected();
        state.tree_move_down();
        state.collapse_or_parent();
        assert_eq!(state.selected_category(), Some("Mathematik"));
        assert!(state.selected_card().is_none());
        state.collapse_or_parent();
        assert_eq!(state.tree_items.len(), 2);
    }

    #[test]
    fn test_deleting_last_card_removes_category() {
        let (_dir, mut state) = logged_in();
        select_category(&mut state, "Mathematik");
        state.activate_selected();
        state.tree_move_down();
        state.delete_selected_card();

        assert!(!state.app.catalog.contains("Mathematik"));
        assert!(!state.expanded.is_expanded("Mathematik"));
        assert_eq!(state.tree_items.len(), 1);
        assert_eq!(state.tree_selected(), 0);
    }

    #[test]
    fn test_delete_on_category_row_is_ignored() {
        let (_dir, mut state) = logged_in();
        state.delete_selected_card();
        assert_eq!(state.app.catalog.card_count(), 3);
    }

    #[test]
    fn test_search_filters_tree() {
        let (_dir, mut state) = logged_in();
        state.start_search();
        state.search_input = "stalin".to_string();
        state.update_search();
        assert_eq!(state.tree_items.len(), 1);
        assert_eq!(state.tree_items[0].label, "2. Weltkrieg");

        state.cancel_search();
        assert_eq!(state.mode, Mode::Tree);
        assert_eq!(state.tree_items.len(), 2);
    }

    #[test]
    fn test_add_card_into_new_category() {
        let (_dir, mut state) = logged_in();
        state.open_add_form();
        {
            let form = state.add_form.as_mut().unwrap();
            form.choice_idx = form.choices.len();
            form.new_category = "Chemie".to_string();
            form.topic = "H2O".to_string();
            form.answer = "Wasser".to_string();
        }
        state.submit_add_form();

        assert_eq!(state.mode, Mode::Tree);
        assert!(state.add_form.is_none());
        let (category, _, card) = state.selected_card().unwrap();
        assert_eq!(category, "Chemie");
        assert_eq!(card.answer.as_deref(), Some("Wasser"));
    }

    #[test]
    fn test_incomplete_add_is_dropped() {
        let (_dir, mut state) = logged_in();
        state.open_add_form();
        state.submit_add_form();
        assert_eq!(state.app.catalog.card_count(), 3);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_settings_adjust_persists() {
        let (dir, mut state) = logged_in();
        state.open_settings();
        state.settings_adjust(1);
        assert!(state.display.dark_mode);

        state.settings_move(1);
        state.settings_adjust(-1);
        assert_eq!(state.display.font_size, 17.0);

        state.settings_move(1);
        state.settings_adjust(1);
        assert_eq!(state.display.card_color, CardColor::Blue);

        let reopened = SettingsStore::open(dir.path()).unwrap().load();
        assert_eq!(reopened, state.display);
    }

    #[test]
    fn test_font_size_stops_at_bounds() {
        let (_dir, mut state) = logged_in();
        state.open_settings();
        state.settings_move(1);
        for _ in 0..40 {
            state.settings_adjust(1);
        }
        assert_eq!(state.display.font_size, 30.0);
    }
}
