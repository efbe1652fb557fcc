//! Data models for the flashcard catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An image attached to a card, as delivered by the image picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    /// File name the image was picked from
    pub name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl CardImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// A flashcard with a topic on the front and an optional answer or image on the back
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Build a card. An empty answer is stored as no answer.
    pub fn new(topic: String, answer: Option<String>, image: Option<CardImage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic,
            answer: answer.filter(|a| !a.is_empty()),
            image,
            created_at: Utc::now(),
        }
    }

    /// What the card shows on the given side
    pub fn face(&self, flipped: bool) -> CardFace<'_> {
        if !flipped {
            return CardFace::Topic(&self.topic);
        }
        if let Some(image) = &self.image {
            CardFace::Image(image)
        } else if let Some(answer) = &self.answer {
            CardFace::Answer(answer)
        } else {
            CardFace::Blank
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.topic == other.topic && self.answer == other.answer && self.image == other.image
    }
}

/// Visible content of one side of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace<'a> {
    Topic(&'a str),
    /// The back prefers the image over the answer text
    Image(&'a CardImage),
    Answer(&'a str),
    Blank,
}

/// A category together with its cards, as produced by catalog queries
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub cards: &'a [Card],
}

impl CategoryView<'_> {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_is_dropped() {
        let card = Card::new("Dauer".to_string(), Some(String::new()), None);
        assert_eq!(card.answer, None);
    }

    #[test]
    fn test_front_face_is_topic() {
        let card = Card::new("Dauer".to_string(), Some("1939-1945".to_string()), None);
        assert_eq!(card.face(false), CardFace::Topic("Dauer"));
        assert_eq!(card.face(true), CardFace::Answer("1939-1945"));
    }

    #[test]
    fn test_back_face_prefers_image() {
        let image = CardImage::new("pi.png", vec![1, 2, 3]);
        let card = Card::new(
            "Pi".to_string(),
            Some("3.14".to_string()),
            Some(image.clone()),
        );
        assert_eq!(card.face(true), CardFace::Image(&image));
    }

    #[test]
    fn test_back_face_blank_without_answer() {
        let card = Card::new("Pi".to_string(), None, None);
        assert_eq!(card.face(true), CardFace::Blank);
    }
}
