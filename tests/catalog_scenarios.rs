use annoncard_lib::flashcards::{CardDraft, CardImage, CategoryChoice, ImageSource};
use annoncard_lib::settings::{JsonFileStore, KeyValueStore, SettingsStore, KEY_FONT_SIZE};
use annoncard_lib::{attempt_login, CardColor, Catalog, ExpandedSet, SessionGate};
use tempfile::TempDir;

struct OnePick(Option<CardImage>);

impl ImageSource for OnePick {
    fn pick(&mut self) -> Option<CardImage> {
        self.0.take()
    }
}

#[test]
fn adding_to_existing_category_keeps_insertion_order() {
    let mut catalog = Catalog::seeded();
    let before: Vec<String> = catalog.categories().map(String::from).collect();

    catalog.add_card("Mathematik", "Kreiszahl", Some("≈3.14"), None);

    let after: Vec<String> = catalog.categories().map(String::from).collect();
    assert_eq!(before, after);
    let topics: Vec<&str> = catalog
        .cards("Mathematik")
        .unwrap()
        .iter()
        .map(|c| c.topic.as_str())
        .collect();
    assert_eq!(topics, vec!["Was ist Pi?", "Kreiszahl"]);
}

#[test]
fn deleting_sole_card_removes_category_and_expansion() {
    let mut catalog = Catalog::seeded();
    let mut expanded = ExpandedSet::new();
    expanded.toggle("Mathematik");

    let removed = catalog.delete_card("Mathematik", 0).unwrap();
    expanded.retain_existing(&catalog);

    assert_eq!(removed.topic, "Was ist Pi?");
    assert!(!catalog.categories().any(|c| c == "Mathematik"));
    assert!(!expanded.is_expanded("Mathematik"));
}

#[test]
fn empty_topic_without_image_is_rejected() {
    let mut catalog = Catalog::seeded();
    let before = catalog.clone();

    assert!(catalog.add_card("Mathematik", "", Some("Antwort"), None).is_none());
    assert_eq!(catalog, before);
}

#[test]
fn filter_matches_names_and_topics() {
    let catalog = Catalog::seeded();

    let all: Vec<&str> = catalog.filter("").iter().map(|v| v.name).collect();
    let names: Vec<&str> = catalog.categories().collect();
    assert_eq!(all, names);

    let by_name: Vec<&str> = catalog.filter("mathe").iter().map(|v| v.name).collect();
    assert_eq!(by_name, vec!["Mathematik"]);

    let by_topic: Vec<&str> = catalog.filter("STALINGRAD").iter().map(|v| v.name).collect();
    assert_eq!(by_topic, vec!["2. Weltkrieg"]);
}

#[test]
fn image_only_card_via_entry_flow() {
    let mut catalog = Catalog::new();
    let mut draft = CardDraft::new(CategoryChoice::New("Bilder".to_string()));
    let mut source = OnePick(Some(CardImage::new("karte.png", vec![1, 2, 3])));

    assert!(draft.attach_from(&mut source));
    assert!(!draft.attach_from(&mut source));
    assert!(draft.image.is_some());

    let card = draft.submit(&mut catalog).unwrap();
    assert!(card.topic.is_empty());
    assert_eq!(card.image.as_ref().map(|i| i.size()), Some(3));
    assert!(catalog.contains("Bilder"));
}

#[test]
fn font_size_is_clamped_and_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut settings = SettingsStore::open(dir.path()).unwrap();
        assert_eq!(settings.set_font_size(5.0).unwrap(), 10.0);
        assert_eq!(settings.set_font_size(99.0).unwrap(), 30.0);
        settings.set_card_color(CardColor::Orange).unwrap();
        settings.set_dark_mode(true).unwrap();
    }

    let reopened = SettingsStore::open(dir.path()).unwrap();
    let display = reopened.load();
    assert_eq!(display.font_size, 30.0);
    assert_eq!(display.card_color, CardColor::Orange);
    assert!(display.dark_mode);

    let raw = JsonFileStore::open(dir.path()).unwrap();
    assert_eq!(raw.get(KEY_FONT_SIZE).and_then(|v| v.as_f64()), Some(30.0));
}

#[test]
fn unknown_stored_color_falls_back_to_purple() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(JsonFileStore::FILE_NAME),
        r#"{"cardColorString": "Chartreuse"}"#,
    )
    .unwrap();

    let settings = SettingsStore::open(dir.path()).unwrap();
    assert_eq!(settings.card_color(), CardColor::Purple);
}

#[test]
fn login_gate() {
    assert!(!attempt_login("", "x"));
    assert!(attempt_login("a", "b"));

    let mut gate = SessionGate::new();
    assert!(!gate.attempt_login("a", ""));
    assert!(!gate.is_logged_in());
    assert!(gate.attempt_login("a", "b"));
    assert_eq!(gate.user(), Some("a"));
}
