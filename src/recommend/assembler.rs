use crate::catalog::{Catalog, Category, Garment, GenderTag};
use crate::occasion::OccasionContext;
use crate::style::ArtistStyleVector;
use crate::user::{GenderIdentity, UserPreferences};

/// Shortlist length per category.
pub const SHORTLIST_SIZE: usize = 3;

/// One shortlist per category, in builder order.
#[derive(Clone, Debug, PartialEq)]
pub struct OutfitRecommendation {
    pub top: Vec<String>,
    pub bottom: Vec<String>,
    pub footwear: Vec<String>,
    pub layering: Vec<String>,
}

impl OutfitRecommendation {
    pub fn shortlist(&self, category: Category) -> &[String] {
        match category {
            Category::Top => &self.top,
            Category::Bottom => &self.bottom,
            Category::Footwear => &self.footwear,
            Category::Layering => &self.layering,
        }
    }
}

fn gender_matches(garment: &Garment, gender: GenderIdentity) -> bool {
    match garment.gender_tag {
        GenderTag::Any => true,
        GenderTag::F => gender == GenderIdentity::Feminine,
        GenderTag::M => gender == GenderIdentity::Masculine,
    }
}

/// Filters one category by gender and weather, scores the survivors against
/// the artist vector and returns the names of the best three. The sort is
/// stable, so equal scores keep their catalog order. An empty filtered set
/// yields an empty shortlist, not an error.
pub fn recommend(
    catalog: &Catalog,
    category: Category,
    preferences: &UserPreferences,
    occasion: &OccasionContext,
    artist_vector: &ArtistStyleVector,
) -> Vec<String> {
    let weather_tag = occasion.weather_tag();

    let mut scored: Vec<(&Garment, f32)> = catalog
        .garments(category)
        .iter()
        .filter(|garment| {
            gender_matches(garment, preferences.gender) && garment.matches_weather(weather_tag)
        })
        .map(|garment| (garment, artist_vector.vector.dot(&garment.vector)))
        .collect();

    // IEEE comparison: -0.0 must tie with +0.0 (an all-negative garment
    // vector dots to -0.0 against the zero artist vector), so equal scores
    // keep their catalog order. Scores are finite, NaN cannot arise.
    scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(SHORTLIST_SIZE)
        .map(|(garment, _)| garment.name.clone())
        .collect()
}

/// Runs all four categories for one request.
pub fn recommend_outfit(
    catalog: &Catalog,
    preferences: &UserPreferences,
    occasion: &OccasionContext,
    artist_vector: &ArtistStyleVector,
) -> OutfitRecommendation {
    OutfitRecommendation {
        top: recommend(catalog, Category::Top, preferences, occasion, artist_vector),
        bottom: recommend(
            catalog,
            Category::Bottom,
            preferences,
            occasion,
            artist_vector,
        ),
        footwear: recommend(
            catalog,
            Category::Footwear,
            preferences,
            occasion,
            artist_vector,
        ),
        layering: recommend(
            catalog,
            Category::Layering,
            preferences,
            occasion,
            artist_vector,
        ),
    }
}
