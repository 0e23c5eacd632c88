use serde::{Deserialize, Serialize};

/// Upper bound for a story's star rating.
pub const MAX_RATING: u8 = 5;

/// One entry of a reel.
///
/// Only `id` and the ordering carry meaning for navigation; every caption
/// field is opaque text handed straight to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Stable identifier, unique within its reel.
    pub id: String,
    /// Image path, resolved against the assets directory.
    pub media: String,
    #[serde(default)]
    pub alt: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub meta: Option<String>,
}

impl Slide {
    /// Rating clamped to `MAX_RATING`.
    pub fn stars(&self) -> Option<u8> {
        self.rating.map(|r| r.min(MAX_RATING))
    }
}

/// Presentation variant of a reel section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReelStyle {
    /// Story cards with rating, author and meta line. Keyboard and hover
    /// are bound to the card viewport.
    #[default]
    Stories,
    /// Full-width imagery with a swipe panel, call-to-action button and
    /// scroll-linked index. Hover is bound to the whole section.
    Visual,
}

/// A named, ordered slide sequence rendered as one carousel section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reel {
    pub name: String,
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub style: ReelStyle,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Reel {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

/// Every reel shown on the page, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, rename = "reel")]
    pub reels: Vec<Reel>,
}

impl Deck {
    pub fn total_slides(&self) -> usize {
        self.reels.iter().map(Reel::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(rating: Option<u8>) -> Slide {
        Slide {
            id: "a".into(),
            media: "a.png".into(),
            alt: String::new(),
            title: "A".into(),
            body: String::new(),
            attribution: None,
            label: None,
            rating,
            meta: None,
        }
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!(slide(Some(9)).stars(), Some(MAX_RATING));
        assert_eq!(slide(Some(3)).stars(), Some(3));
        assert_eq!(slide(None).stars(), None);
    }

    #[test]
    fn style_defaults_to_stories() {
        assert_eq!(ReelStyle::default(), ReelStyle::Stories);
    }
}
