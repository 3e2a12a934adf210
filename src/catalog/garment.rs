use crate::style::StyleVector;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Footwear,
    Layering,
}

impl Category {
    /// Builder order: the outfit is assembled top to layering.
    pub const ALL: [Category; 4] = [
        Category::Top,
        Category::Bottom,
        Category::Footwear,
        Category::Layering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Footwear => "footwear",
            Category::Layering => "layering",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GenderTag {
    F,
    M,
    #[serde(rename = "any")]
    Any,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherTag {
    Warm,
    Cold,
    Rainy,
    Windy,
    All,
}

/// A catalog item. Garments are static data, never created or destroyed at
/// runtime; the vector is authored within [-1, 1] but not enforced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Garment {
    pub name: String,
    pub vector: StyleVector,
    pub weather_tags: Vec<WeatherTag>,
    pub gender_tag: GenderTag,
}

impl Garment {
    /// An `all` tag on the garment matches any conditions. The `all` mapped
    /// tag (unknown weather strings) only matches garments tagged `all`
    /// themselves.
    pub fn matches_weather(&self, tag: WeatherTag) -> bool {
        self.weather_tags.contains(&WeatherTag::All) || self.weather_tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garment(weather_tags: Vec<WeatherTag>) -> Garment {
        Garment {
            name: "Test Garment".to_owned(),
            vector: StyleVector::ZERO,
            weather_tags,
            gender_tag: GenderTag::Any,
        }
    }

    #[test]
    fn all_tag_matches_every_weather() {
        let g = garment(vec![WeatherTag::All]);
        for tag in [
            WeatherTag::Warm,
            WeatherTag::Cold,
            WeatherTag::Rainy,
            WeatherTag::Windy,
            WeatherTag::All,
        ] {
            assert!(g.matches_weather(tag));
        }
    }

    #[test]
    fn specific_tags_only_match_themselves() {
        let g = garment(vec![WeatherTag::Warm]);
        assert!(g.matches_weather(WeatherTag::Warm));
        assert!(!g.matches_weather(WeatherTag::Cold));
        assert!(!g.matches_weather(WeatherTag::All));
    }
}
