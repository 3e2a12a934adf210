use super::vector::StyleVector;

pub const NEUTRAL_GENRE: &str = "neutral";

/// Base vectors per coarse genre. The preset dominates the blend (0.7 weight),
/// the live signal vector only nudges it.
const GENRE_PRESETS: &[(&str, StyleVector)] = &[
    (
        "pop",
        StyleVector {
            minimal_loud: 0.4,
            fitted_oversized: -0.2,
            classic_experimental: 0.2,
            soft_edgy: -0.3,
            casual_glam: 0.6,
        },
    ),
    (
        "techno",
        StyleVector {
            minimal_loud: -0.4,
            fitted_oversized: 0.3,
            classic_experimental: 0.5,
            soft_edgy: 0.8,
            casual_glam: -0.6,
        },
    ),
    (
        "industrial",
        StyleVector {
            minimal_loud: -0.6,
            fitted_oversized: 0.5,
            classic_experimental: 0.7,
            soft_edgy: 0.9,
            casual_glam: -0.8,
        },
    ),
    (
        "rock",
        StyleVector {
            minimal_loud: 0.2,
            fitted_oversized: -0.3,
            classic_experimental: 0.3,
            soft_edgy: 0.6,
            casual_glam: 0.1,
        },
    ),
    (
        "classic",
        StyleVector {
            minimal_loud: -0.8,
            fitted_oversized: -0.6,
            classic_experimental: -0.7,
            soft_edgy: -0.5,
            casual_glam: 0.3,
        },
    ),
    (NEUTRAL_GENRE, StyleVector::ZERO),
];

/// Case-insensitive preset lookup. Unknown genres silently fall back to the
/// all-zero neutral preset instead of failing.
pub fn genre_preset(genre_hint: &str) -> StyleVector {
    let hint = genre_hint.to_lowercase();
    GENRE_PRESETS
        .iter()
        .find(|(genre, _)| *genre == hint)
        .map(|(_, vector)| *vector)
        .unwrap_or(StyleVector::ZERO)
}

pub fn known_genres() -> impl Iterator<Item = &'static str> {
    GENRE_PRESETS.iter().map(|(genre, _)| *genre)
}
