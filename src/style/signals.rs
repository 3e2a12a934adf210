use super::vector::StyleVector;

/// Signal collection is a stand-in for an external artist-data lookup
/// (search API or similar). Only the `artist name -> keywords` boundary is
/// meant to survive a real implementation; everything behind it would go.
/// Matching is coarse substring containment, not fuzzy search.
const ARTIST_SIGNALS: &[(&str, &[&str])] = &[
    ("swift", &["sparkle", "sequin", "silk", "fitted", "glam"]),
    ("harry", &["avant-garde", "sheer", "organza", "oversized", "glam"]),
    (
        "witte",
        &["leather", "vinyl", "mesh", "oversized", "monochrome", "edgy"],
    ),
    (
        "techno",
        &["leather", "vinyl", "mesh", "oversized", "monochrome", "edgy"],
    ),
    ("gala", &["tailored", "silk", "minimalist", "monochrome"]),
];

/// Per-keyword nudges on the style axes. Keywords without an entry here
/// (e.g. "glam", "edgy") are ignored by the mapper, not an error.
const SIGNAL_DELTAS: &[(&str, StyleVector)] = &[
    // Texture / material
    (
        "silk",
        StyleVector {
            soft_edgy: -0.4,
            casual_glam: 0.5,
            ..StyleVector::ZERO
        },
    ),
    (
        "leather",
        StyleVector {
            soft_edgy: 0.6,
            classic_experimental: 0.2,
            ..StyleVector::ZERO
        },
    ),
    (
        "mesh",
        StyleVector {
            classic_experimental: 0.5,
            soft_edgy: 0.4,
            ..StyleVector::ZERO
        },
    ),
    (
        "denim",
        StyleVector {
            casual_glam: -0.4,
            minimal_loud: 0.1,
            ..StyleVector::ZERO
        },
    ),
    (
        "organza",
        StyleVector {
            soft_edgy: -0.5,
            classic_experimental: 0.4,
            ..StyleVector::ZERO
        },
    ),
    (
        "vinyl",
        StyleVector {
            soft_edgy: 0.7,
            classic_experimental: 0.6,
            ..StyleVector::ZERO
        },
    ),
    // Detail / attribute
    (
        "sparkle",
        StyleVector {
            casual_glam: 0.6,
            minimal_loud: 0.5,
            ..StyleVector::ZERO
        },
    ),
    (
        "sequin",
        StyleVector {
            casual_glam: 0.7,
            minimal_loud: 0.6,
            ..StyleVector::ZERO
        },
    ),
    (
        "oversized",
        StyleVector {
            fitted_oversized: 0.8,
            ..StyleVector::ZERO
        },
    ),
    (
        "baggy",
        StyleVector {
            fitted_oversized: 0.7,
            ..StyleVector::ZERO
        },
    ),
    (
        "fitted",
        StyleVector {
            fitted_oversized: -0.8,
            ..StyleVector::ZERO
        },
    ),
    (
        "tailored",
        StyleVector {
            fitted_oversized: -0.7,
            classic_experimental: -0.4,
            ..StyleVector::ZERO
        },
    ),
    (
        "distressed",
        StyleVector {
            soft_edgy: 0.5,
            minimal_loud: 0.3,
            ..StyleVector::ZERO
        },
    ),
    (
        "reflective",
        StyleVector {
            classic_experimental: 0.6,
            soft_edgy: 0.3,
            ..StyleVector::ZERO
        },
    ),
    (
        "sheer",
        StyleVector {
            classic_experimental: 0.4,
            soft_edgy: -0.2,
            ..StyleVector::ZERO
        },
    ),
    (
        "neon",
        StyleVector {
            minimal_loud: 0.8,
            classic_experimental: 0.5,
            ..StyleVector::ZERO
        },
    ),
    (
        "monochrome",
        StyleVector {
            minimal_loud: -0.7,
            ..StyleVector::ZERO
        },
    ),
    (
        "minimalist",
        StyleVector {
            minimal_loud: -0.8,
            ..StyleVector::ZERO
        },
    ),
    (
        "avant-garde",
        StyleVector {
            classic_experimental: 0.9,
            soft_edgy: 0.4,
            ..StyleVector::ZERO
        },
    ),
];

/// Derives the raw signal multiset for an artist name. Duplicates are kept,
/// they weigh into the frequencies. Unknown names yield an empty sequence.
pub fn extract_signals(artist_name: &str) -> Vec<&'static str> {
    let name = artist_name.to_lowercase();
    let mut signals = vec![];
    for (fragment, keywords) in ARTIST_SIGNALS {
        if name.contains(fragment) {
            signals.extend_from_slice(keywords);
        }
    }
    signals
}

/// Turns the signal multiset into relative frequencies, keyed in first-seen
/// order. The order matters downstream: the dominant signals are the first
/// three keys.
pub fn normalize_signals(signals: &[&'static str]) -> Vec<(&'static str, f32)> {
    let mut counts: Vec<(&'static str, usize)> = vec![];
    for &signal in signals {
        if let Some(entry) = counts.iter_mut().find(|entry| entry.0 == signal) {
            entry.1 += 1;
        } else {
            counts.push((signal, 1));
        }
    }

    let total = signals.len().max(1) as f32;
    counts
        .into_iter()
        .map(|(key, count)| (key, count as f32 / total))
        .collect()
}

/// Folds normalized signals through the delta table into a raw style vector.
pub fn map_to_style_vector(normalized: &[(&'static str, f32)]) -> StyleVector {
    let mut vector = StyleVector::ZERO;
    for (signal, frequency) in normalized {
        if let Some((_, delta)) = SIGNAL_DELTAS.iter().find(|(key, _)| key == signal) {
            vector = vector.added(&delta.scaled(*frequency));
        }
    }
    vector
}
