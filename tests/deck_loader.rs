use petreels::deck::{builtin, Deck, DeckError, ReelStyle};
use std::fs;
use tempfile::TempDir;

const TWO_REELS: &str = r#"
[[reel]]
name = "shelter"
heading = "From the shelter"

[[reel.slides]]
id = "milo"
media = "milo.png"
title = "Milo is home"
rating = 4

[[reel.slides]]
id = "pepper"
media = "/pepper.jpeg"
title = "Pepper found her way back"
body = "Spotted two streets over."

[[reel]]
name = "banner"
heading = "Keep looking"
style = "visual"
"#;

#[test]
fn parses_reels_in_order() {
    let deck = Deck::from_toml_str(TWO_REELS).unwrap();
    assert_eq!(deck.reels.len(), 2);
    assert_eq!(deck.reels[0].name, "shelter");
    assert_eq!(deck.reels[0].style, ReelStyle::Stories);
    assert_eq!(deck.reels[0].slides[1].id, "pepper");
    assert_eq!(deck.reels[1].style, ReelStyle::Visual);
    assert!(deck.reels[1].is_empty());
    assert_eq!(deck.total_slides(), 2);
}

#[test]
fn optional_caption_fields_default() {
    let deck = Deck::from_toml_str(TWO_REELS).unwrap();
    let milo = &deck.reels[0].slides[0];
    assert_eq!(milo.body, "");
    assert_eq!(milo.alt, "");
    assert!(milo.attribution.is_none());
    assert_eq!(milo.stars(), Some(4));
}

#[test]
fn load_from_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deck.toml");
    fs::write(&path, TWO_REELS).unwrap();

    let deck = Deck::load_from(&path).unwrap();
    assert_eq!(deck, Deck::from_toml_str(TWO_REELS).unwrap());
}

#[test]
fn missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Deck::load_from(&temp_dir.path().join("nope.toml"));
    assert!(matches!(result, Err(DeckError::ReadError { .. })));
}

#[test]
fn slide_without_title_is_parse_error() {
    let content = r#"
[[reel]]
name = "x"
heading = "x"

[[reel.slides]]
id = "a"
media = "a.png"
"#;
    assert!(matches!(
        Deck::from_toml_str(content),
        Err(DeckError::ParseError { .. })
    ));
}

#[test]
fn blank_reel_name_is_rejected() {
    let content = "[[reel]]\nname = \"  \"\nheading = \"h\"\n";
    assert!(matches!(
        Deck::from_toml_str(content),
        Err(DeckError::EmptyReelName { position: 0 })
    ));
}

#[test]
fn duplicate_slide_ids_are_rejected() {
    let content = r#"
[[reel]]
name = "dupes"
heading = "h"

[[reel.slides]]
id = "same"
media = "a.png"
title = "A"

[[reel.slides]]
id = "same"
media = "b.png"
title = "B"
"#;
    let err = Deck::from_toml_str(content).unwrap_err();
    assert!(matches!(err, DeckError::DuplicateSlideId { .. }));
    assert!(err.to_string().contains("same"));
}

#[test]
fn builtin_deck_is_valid() {
    let deck = builtin();
    assert!(deck.validate().is_ok());
    assert_eq!(deck.reels[0].style, ReelStyle::Stories);
    assert_eq!(deck.reels[1].style, ReelStyle::Visual);
    assert_eq!(deck.reels[0].len(), 4);
}
