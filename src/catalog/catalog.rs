use super::garment::{Category, Garment};
use anyhow::Result;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashSet;

/// The authored garment data, embedded at compile time. One catalog exists
/// for the process lifetime; nothing mutates it after parsing.
const GARMENTS_JSON: &str = include_str!("../../data/garments.json");

lazy_static! {
    static ref CATALOG: Catalog = Catalog::parse_embedded()
        .expect("Embedded garment catalog is invalid, this should be fixed at build time.");
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    top: Vec<Garment>,
    bottom: Vec<Garment>,
    footwear: Vec<Garment>,
    layering: Vec<Garment>,
}

/// Non-fatal findings are reported and tolerated; a duplicate name within a
/// category breaks the per-category uniqueness invariant and is fatal.
#[derive(Debug, PartialEq)]
pub enum Problem {
    DuplicateGarmentName { category: Category, name: String },
    VectorOutOfRange { category: Category, name: String },
    NoWeatherTags { category: Category, name: String },
    ShortCategory { category: Category, count: usize },
}

impl Problem {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Problem::DuplicateGarmentName { .. })
    }
}

impl Catalog {
    fn parse_embedded() -> Result<Catalog> {
        Ok(serde_json::from_str(GARMENTS_JSON)?)
    }

    /// The process-wide catalog instance.
    pub fn get() -> &'static Catalog {
        &CATALOG
    }

    pub fn garments(&self, category: Category) -> &[Garment] {
        match category {
            Category::Top => &self.top,
            Category::Bottom => &self.bottom,
            Category::Footwear => &self.footwear,
            Category::Layering => &self.layering,
        }
    }

    pub fn garments_count(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.garments(*category).len())
            .sum()
    }

    pub fn check(&self) -> Vec<Problem> {
        let mut problems = vec![];

        for category in Category::ALL {
            let garments = self.garments(category);

            let mut seen_names = HashSet::new();
            for garment in garments {
                if !seen_names.insert(garment.name.as_str()) {
                    problems.push(Problem::DuplicateGarmentName {
                        category,
                        name: garment.name.clone(),
                    });
                }

                let out_of_range = garment
                    .vector
                    .as_array()
                    .iter()
                    .any(|value| !(-1.0..=1.0).contains(value));
                if out_of_range {
                    problems.push(Problem::VectorOutOfRange {
                        category,
                        name: garment.name.clone(),
                    });
                }

                if garment.weather_tags.is_empty() {
                    problems.push(Problem::NoWeatherTags {
                        category,
                        name: garment.name.clone(),
                    });
                }
            }

            if garments.len() < 3 {
                problems.push(Problem::ShortCategory {
                    category,
                    count: garments.len(),
                });
            }
        }

        problems
    }

    #[cfg(test)]
    pub fn from_parts(
        top: Vec<Garment>,
        bottom: Vec<Garment>,
        footwear: Vec<Garment>,
        layering: Vec<Garment>,
    ) -> Catalog {
        Catalog {
            top,
            bottom,
            footwear,
            layering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::garment::{GenderTag, WeatherTag};
    use crate::style::StyleVector;

    fn plain_garment(name: &str) -> Garment {
        Garment {
            name: name.to_owned(),
            vector: StyleVector::ZERO,
            weather_tags: vec![WeatherTag::All],
            gender_tag: GenderTag::Any,
        }
    }

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::get();
        assert!(catalog.garments_count() > 0);
        for category in Category::ALL {
            assert!(!catalog.garments(category).is_empty());
        }
    }

    #[test]
    fn embedded_catalog_has_no_problems() {
        assert!(Catalog::get().check().is_empty());
    }

    #[test]
    fn check_flags_duplicates_as_fatal() {
        let catalog = Catalog::from_parts(
            vec![
                plain_garment("Same Name"),
                plain_garment("Same Name"),
                plain_garment("Other Name"),
            ],
            vec![],
            vec![],
            vec![],
        );
        let problems = catalog.check();
        assert!(problems
            .iter()
            .any(|p| matches!(p, Problem::DuplicateGarmentName { .. }) && p.is_fatal()));
        assert!(problems
            .iter()
            .any(|p| matches!(p, Problem::ShortCategory { count: 0, .. })));
    }

    #[test]
    fn check_flags_out_of_range_vectors_and_missing_tags() {
        let mut loud = plain_garment("Too Loud");
        loud.vector.minimal_loud = 1.5;
        loud.weather_tags = vec![];
        let catalog = Catalog::from_parts(
            vec![loud, plain_garment("Fine"), plain_garment("Also Fine")],
            vec![],
            vec![],
            vec![],
        );
        let problems = catalog.check();
        assert!(problems.iter().any(|p| matches!(
            p,
            Problem::VectorOutOfRange { name, .. } if name == "Too Loud"
        )));
        assert!(problems.iter().any(|p| matches!(
            p,
            Problem::NoWeatherTags { name, .. } if name == "Too Loud"
        )));
        assert!(!problems.iter().any(|p| p.is_fatal()));
    }
}
