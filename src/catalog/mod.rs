mod catalog;
mod garment;
mod load;

pub use catalog::{Catalog, Problem};
pub use garment::{Category, Garment, GenderTag, WeatherTag};
pub use load::load_catalog;
