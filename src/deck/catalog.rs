//! Built-in content shown when no deck file is configured.

use crate::deck::slide::{Deck, Reel, ReelStyle, Slide};

const COMMUNITY_HEADING: &str = "Stories from the PetReunite community";
const COMMUNITY_INTRO: &str = "Scroll through real-world moments where missing pets were spotted, \
reported, and brought safely home.";

pub fn builtin() -> Deck {
    Deck {
        reels: vec![stories_reel(), visual_reel()],
    }
}

fn stories_reel() -> Reel {
    Reel {
        name: "stories".to_string(),
        heading: COMMUNITY_HEADING.to_string(),
        intro: COMMUNITY_INTRO.to_string(),
        style: ReelStyle::Stories,
        slides: vec![
            story(
                "buddy",
                "dog.jpeg",
                "Buddy's Second Chance",
                "Success Story",
                "Buddy was found near the highway with a limp and a frightened heart. \
Volunteers cleaned and treated his wounds, placed him in foster care, and after two weeks \
he found a loving home.",
                "Raj Patel - Pet Owner (Mumbai, India)",
                "Male - 3 years - Reunited in 14 days",
                "Buddy, a tan mixed-breed dog, sitting on grass, looking healthy",
            ),
            story(
                "roxy",
                "dog2.jpeg",
                "Roxy's Reunion",
                "Community Success",
                "Roxy went missing during monsoon storms. A neighbourhood volunteer snapped a \
photo and posted it on PetReunite. Within hours the owner and rescuer were connected and \
Roxy was safely brought home.",
                "Priya Sharma - Pet Owner (Bengaluru, India)",
                "Female - 2 years - Reunited in 8 hours",
                "Roxy, a happy small dog, running on green grass",
            ),
            story(
                "luna",
                "cat.jpeg",
                "Luna's Rescue Story",
                "Rescue Story",
                "Luna was injured and underweight when a passerby reported her. Volunteers \
nursed her back to health and posted her profile. A local family adopted her after meeting \
her foster.",
                "Aisha Khan - Pet Owner (Hyderabad, India)",
                "Female - 1 year - Rehabilitated and adopted",
                "Luna, a small cream-coloured kitten with blue eyes",
            ),
            story(
                "shadow",
                "horse.jpeg",
                "Shadow's Safe Return",
                "Community Rescue",
                "Shadow, a retired working horse, slipped out of a stable. Neighbourhood search \
teams coordinated through PetReunite and helped return him to his owner the same day.",
                "Vikram Singh - Horse Owner (Jaipur, India)",
                "Male - 7 years - Reunited same day",
                "Shadow, a brown horse standing in a field",
            ),
        ],
    }
}

fn visual_reel() -> Reel {
    Reel {
        name: "visual".to_string(),
        heading: COMMUNITY_HEADING.to_string(),
        intro: COMMUNITY_INTRO.to_string(),
        style: ReelStyle::Visual,
        slides: vec![
            visual(
                "bg1.png",
                "Found with the help of neighbors",
                "Local alerts and real-time updates help nearby families spot and report \
missing pets quickly.",
                "Two golden retriever puppies sitting together on a beach at sunset",
            ),
            visual(
                "bg2.jpeg",
                "Every sighting matters",
                "Verified reports and photos make it easier to confirm when a pet has really \
been seen.",
                "Cat and dog sitting together in a sunlit field with a butterfly above",
            ),
            visual(
                "dashboard.png",
                "Track cases in one place",
                "Owners, rescuers, and volunteers can follow each case from first report to \
safe reunion.",
                "Dashboard interface showing pet reports and search tools",
            ),
            visual(
                "hero-willow.png",
                "Built for real-world emergencies",
                "Tools designed around real rescue workflows help everyone respond faster \
when every minute counts.",
                "Abstract pet-themed background illustration",
            ),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn story(
    id: &str,
    media: &str,
    title: &str,
    label: &str,
    body: &str,
    author: &str,
    meta: &str,
    alt: &str,
) -> Slide {
    Slide {
        id: id.to_string(),
        media: media.to_string(),
        alt: alt.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        attribution: Some(author.to_string()),
        label: Some(label.to_string()),
        rating: Some(5),
        meta: Some(meta.to_string()),
    }
}

// Visual slides are keyed by their media path.
fn visual(media: &str, title: &str, body: &str, alt: &str) -> Slide {
    Slide {
        id: media.to_string(),
        media: media.to_string(),
        alt: alt.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        attribution: None,
        label: None,
        rating: None,
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_is_valid() {
        let deck = builtin();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.reels.len(), 2);
        assert_eq!(deck.total_slides(), 8);
    }

    #[test]
    fn builtin_reels_keep_their_order() {
        let deck = builtin();
        let titles: Vec<&str> = deck.reels[0]
            .slides
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Buddy's Second Chance",
                "Roxy's Reunion",
                "Luna's Rescue Story",
                "Shadow's Safe Return"
            ]
        );
        assert_eq!(deck.reels[1].style, ReelStyle::Visual);
    }
}
