use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use annoncard_lib::flashcards::{CardDraft, CardImage, CategoryChoice, FileImageSource};

use super::app_state::TuiState;
use super::theme::Theme;

/// Label of the picker entry that creates a new category
pub const NEW_CATEGORY: &str = "New category";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Category,
    NewCategory,
    Topic,
    Answer,
    Image,
}

/// State of the "add flashcard" popup
#[derive(Debug, Clone)]
pub struct AddCardForm {
    /// Existing categories, in display order
    pub choices: Vec<String>,
    /// Index into `choices`; `choices.len()` selects a new category
    pub choice_idx: usize,
    pub new_category: String,
    pub topic: String,
    pub answer: String,
    pub image_path: String,
    pub image: Option<CardImage>,
    pub focus: AddField,
}

impl AddCardForm {
    pub fn new(choices: Vec<String>, preselect: Option<&str>) -> Self {
        let choice_idx = preselect
            .and_then(|name| choices.iter().position(|c| c == name))
            .unwrap_or(choices.len());
        let focus = if choice_idx == choices.len() {
            AddField::NewCategory
        } else {
            AddField::Topic
        };

        Self {
            choices,
            choice_idx,
            new_category: String::new(),
            topic: String::new(),
            answer: String::new(),
            image_path: String::new(),
            image: None,
            focus,
        }
    }

    pub fn is_new_category(&self) -> bool {
        self.choice_idx >= self.choices.len()
    }

    pub fn choice_label(&self) -> &str {
        self.choices
            .get(self.choice_idx)
            .map(String::as_str)
            .unwrap_or(NEW_CATEGORY)
    }

    pub fn category_choice(&self) -> CategoryChoice {
        match self.choices.get(self.choice_idx) {
            Some(name) => CategoryChoice::Existing(name.clone()),
            None => CategoryChoice::New(self.new_category.clone()),
        }
    }

    /// Fields in tab order; the new-category name only shows when needed
    pub fn fields(&self) -> Vec<AddField> {
        let mut fields = vec![AddField::Category];
        if self.is_new_category() {
            fields.push(AddField::NewCategory);
        }
        fields.extend([AddField::Topic, AddField::Answer, AddField::Image]);
        fields
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(fields.len() as isize) as usize;
        self.focus = fields[next];
    }

    /// Step through existing categories and the "new category" entry
    pub fn cycle_choice(&mut self, delta: isize) {
        let len = self.choices.len() as isize + 1;
        self.choice_idx = (self.choice_idx as isize + delta).rem_euclid(len) as usize;
    }

    /// Text buffer of the focused field, if it takes text input
    pub fn input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            AddField::Category => None,
            AddField::NewCategory => Some(&mut self.new_category),
            AddField::Topic => Some(&mut self.topic),
            AddField::Answer => Some(&mut self.answer),
            AddField::Image => Some(&mut self.image_path),
        }
    }

    /// Load the image named in the path field. Returns whether one was attached.
    pub fn attach_image(&mut self) -> bool {
        let path = self.image_path.trim();
        let mut source = if path.is_empty() {
            FileImageSource::cancelled()
        } else {
            FileImageSource::new(path)
        };
        let mut draft = CardDraft {
            image: self.image.take(),
            ..Default::default()
        };
        let attached = draft.attach_from(&mut source);
        self.image = draft.image;
        attached
    }

    pub fn into_draft(self) -> CardDraft {
        CardDraft {
            choice: self.category_choice(),
            topic: self.topic,
            answer: self.answer,
            image: self.image,
        }
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState, theme: &Theme) {
    let Some(form) = state.add_form.as_ref() else {
        return;
    };

    let width = area.width.saturating_sub(4).min(60);
    let height = 14u16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Add flashcard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card))
        .style(theme.base());

    let field_line = |field: AddField, label: &str, value: String| {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(theme.card).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let cursor = if focused && field != AddField::Category { "\u{2588}" } else { "" };
        Line::from(vec![
            Span::styled(format!(" {:<13}", label), label_style),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(theme.fg)),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        field_line(AddField::Category, "Category", format!("\u{25c2} {} \u{25b8}", form.choice_label())),
    ];
    if form.is_new_category() {
        lines.push(field_line(AddField::NewCategory, "Name", form.new_category.clone()));
    }
    lines.push(field_line(AddField::Topic, "Topic", form.topic.clone()));
    lines.push(field_line(AddField::Answer, "Answer", form.answer.clone()));
    lines.push(field_line(AddField::Image, "Image path", form.image_path.clone()));

    let attached = match &form.image {
        Some(image) => format!(" Attached: {} ({} bytes)", image.name, image.size()),
        None => " No image attached".to_string(),
    };
    lines.push(Line::from(Span::styled(attached, Style::default().fg(theme.dim))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab: next field  \u{2190}/\u{2192}: category  Enter: save (attach on image)  Esc: cancel",
        Style::default().fg(theme.dim),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["2. Weltkrieg".to_string(), "Mathematik".to_string()]
    }

    #[test]
    fn test_defaults_to_new_category() {
        let form = AddCardForm::new(choices(), None);
        assert!(form.is_new_category());
        assert_eq!(form.focus, AddField::NewCategory);
        assert_eq!(form.category_choice(), CategoryChoice::New(String::new()));
    }

    #[test]
    fn test_preselects_existing_category() {
        let form = AddCardForm::new(choices(), Some("Mathematik"));
        assert_eq!(form.choice_label(), "Mathematik");
        assert_eq!(form.fields(), vec![AddField::Category, AddField::Topic, AddField::Answer, AddField::Image]);
    }

    #[test]
    fn test_cycle_choice_wraps_through_new_entry() {
        let mut form = AddCardForm::new(choices(), Some("Mathematik"));
        form.cycle_choice(1);
        assert!(form.is_new_category());
        form.cycle_choice(1);
        assert_eq!(form.choice_label(), "2. Weltkrieg");
        form.cycle_choice(-1);
        assert_eq!(form.choice_label(), NEW_CATEGORY);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = AddCardForm::new(choices(), Some("Mathematik"));
        form.focus = AddField::Image;
        form.focus_next();
        assert_eq!(form.focus, AddField::Category);
        form.focus_prev();
        assert_eq!(form.focus, AddField::Image);
    }

    #[test]
    fn test_attach_with_empty_path_is_cancel() {
        let mut form = AddCardForm::new(choices(), None);
        assert!(!form.attach_image());
        assert!(form.image.is_none());
    }

    #[test]
    fn test_into_draft_uses_new_category_name() {
        let mut form = AddCardForm::new(choices(), None);
        form.new_category = "Chemie".to_string();
        form.topic = "H2O".to_string();
        let draft = form.into_draft();
        assert_eq!(draft.choice.resolve(), "Chemie");
        assert!(draft.is_complete());
    }
}
