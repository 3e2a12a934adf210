use crate::catalog::WeatherTag;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Day,
    Night,
}

/// One recommendation request's context, as entered in the occasion form.
/// Ephemeral; nothing here is persisted. Weather stays a free string because
/// unknown values are legal and map to the `all` tag.
#[derive(Clone, Debug)]
pub struct OccasionContext {
    pub occasion: String,
    pub weather: String,
    pub artist: String,
    pub location: String,
    pub time: TimeOfDay,
}

impl OccasionContext {
    pub fn weather_tag(&self) -> WeatherTag {
        weather_tag(&self.weather)
    }
}

/// Fixed mapping from the weather form labels to catalog tags. Anything
/// unrecognized degrades to `all` rather than failing.
pub fn weather_tag(weather: &str) -> WeatherTag {
    match weather {
        "Sunny" | "Clear" => WeatherTag::Warm,
        "Rainy" => WeatherTag::Rainy,
        "Cold/Winter" => WeatherTag::Cold,
        "Windy" => WeatherTag::Windy,
        _ => WeatherTag::All,
    }
}

/// The form's weather choices. At night "Sunny" is not offered, "Clear"
/// takes its place.
pub fn weather_options(time: TimeOfDay) -> [&'static str; 4] {
    match time {
        TimeOfDay::Day => ["Sunny", "Rainy", "Cold/Winter", "Windy"],
        TimeOfDay::Night => ["Clear", "Rainy", "Cold/Winter", "Windy"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_their_tags() {
        assert_eq!(weather_tag("Sunny"), WeatherTag::Warm);
        assert_eq!(weather_tag("Clear"), WeatherTag::Warm);
        assert_eq!(weather_tag("Rainy"), WeatherTag::Rainy);
        assert_eq!(weather_tag("Cold/Winter"), WeatherTag::Cold);
        assert_eq!(weather_tag("Windy"), WeatherTag::Windy);
    }

    #[test]
    fn unknown_labels_default_to_all() {
        assert_eq!(weather_tag("Hailstorm"), WeatherTag::All);
        assert_eq!(weather_tag(""), WeatherTag::All);
    }

    #[test]
    fn night_offers_clear_instead_of_sunny() {
        assert!(weather_options(TimeOfDay::Night).contains(&"Clear"));
        assert!(!weather_options(TimeOfDay::Night).contains(&"Sunny"));
        assert!(weather_options(TimeOfDay::Day).contains(&"Sunny"));
    }
}
