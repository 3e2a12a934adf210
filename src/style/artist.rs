use super::presets::{genre_preset, NEUTRAL_GENRE};
use super::signals::{extract_signals, map_to_style_vector, normalize_signals};
use super::vector::{blend, StyleVector};

/// Blend weights: the genre preset is the dominant basis, the live signal
/// vector only nudges it.
const BASE_WEIGHT: f32 = 0.7;
const SIGNAL_WEIGHT: f32 = 0.3;

const DOMINANT_SIGNALS_COUNT: usize = 3;

/// The derived target aesthetic for one recommendation request. Computed
/// fresh per request, never cached.
#[derive(Clone, Debug)]
pub struct ArtistStyleVector {
    pub artist: String,
    pub vector: StyleVector,
    pub dominant_signals: Vec<&'static str>,
}

/// Runs the full signal pipeline: extraction, normalization, delta mapping,
/// then blending with the genre preset and clamping to [-1, 1] per dimension.
///
/// A `None` genre hint means `neutral`. Every lookup on the way degrades to a
/// documented default, so this cannot fail.
pub fn generate_artist_vector(artist_name: &str, genre_hint: Option<&str>) -> ArtistStyleVector {
    let raw_signals = extract_signals(artist_name);
    let normalized = normalize_signals(&raw_signals);
    let signal_vector = map_to_style_vector(&normalized);

    let base_vector = genre_preset(genre_hint.unwrap_or(NEUTRAL_GENRE));
    let vector = blend(&base_vector, &signal_vector, (BASE_WEIGHT, SIGNAL_WEIGHT));

    ArtistStyleVector {
        artist: artist_name.to_owned(),
        vector,
        dominant_signals: normalized
            .iter()
            .take(DOMINANT_SIGNALS_COUNT)
            .map(|(signal, _)| *signal)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn taylor_swift_pop_arithmetic() {
        let artist = generate_artist_vector("Taylor Swift", Some("pop"));

        // Five signals at frequency 0.2 each; "glam" has no delta entry.
        // Mapped: ml 0.22, fo -0.16, ce 0, se -0.08, cg 0.36.
        // Blended with the pop preset at 0.7/0.3.
        assert_close(artist.vector.minimal_loud, 0.346);
        assert_close(artist.vector.fitted_oversized, -0.188);
        assert_close(artist.vector.classic_experimental, 0.14);
        assert_close(artist.vector.soft_edgy, -0.234);
        assert_close(artist.vector.casual_glam, 0.528);

        assert_eq!(artist.dominant_signals, vec!["sparkle", "sequin", "silk"]);
    }

    #[test]
    fn empty_artist_with_neutral_genre_is_zero() {
        let artist = generate_artist_vector("", None);
        assert_eq!(artist.vector, StyleVector::ZERO);
        assert!(artist.dominant_signals.is_empty());
    }

    #[test]
    fn unknown_genre_hint_behaves_like_neutral() {
        let emo = generate_artist_vector("Taylor Swift", Some("emo"));
        let neutral = generate_artist_vector("Taylor Swift", Some("neutral"));
        assert_eq!(emo.vector, neutral.vector);
    }

    #[test]
    fn output_stays_within_unit_bounds() {
        for (name, genre) in [
            ("Charlotte de Witte", Some("industrial")),
            ("Harry Styles", Some("pop")),
            ("met gala techno swift harry", Some("techno")),
        ] {
            let artist = generate_artist_vector(name, genre);
            for value in [
                artist.vector.minimal_loud,
                artist.vector.fitted_oversized,
                artist.vector.classic_experimental,
                artist.vector.soft_edgy,
                artist.vector.casual_glam,
            ] {
                assert!((-1.0..=1.0).contains(&value));
            }
        }
    }
}
