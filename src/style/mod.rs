mod artist;
mod presets;
mod signals;
mod vector;

pub use artist::{generate_artist_vector, ArtistStyleVector};
pub use presets::{genre_preset, known_genres, NEUTRAL_GENRE};
pub use signals::{extract_signals, map_to_style_vector, normalize_signals};
pub use vector::{blend, StyleVector, STYLE_DIM};
