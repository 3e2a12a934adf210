mod assembler;

pub use assembler::{recommend, recommend_outfit, OutfitRecommendation, SHORTLIST_SIZE};
