use serde::{Deserialize, Serialize};

/// Number of style dimensions.
pub const STYLE_DIM: usize = 5;

/// A point in the 5-axis aesthetic space. Every vector carries all five
/// dimensions; partial deltas are authored with `..StyleVector::ZERO`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleVector {
    pub minimal_loud: f32,
    pub fitted_oversized: f32,
    pub classic_experimental: f32,
    pub soft_edgy: f32,
    pub casual_glam: f32,
}

impl StyleVector {
    pub const ZERO: StyleVector = StyleVector {
        minimal_loud: 0.0,
        fitted_oversized: 0.0,
        classic_experimental: 0.0,
        soft_edgy: 0.0,
        casual_glam: 0.0,
    };

    /// Dot product over the five dimensions.
    ///
    /// Intentionally not normalized by magnitude: two aligned vectors score
    /// higher the stronger their stylistic statement is. Do not "fix" this to
    /// cosine similarity.
    pub fn dot(&self, other: &StyleVector) -> f32 {
        self.minimal_loud * other.minimal_loud
            + self.fitted_oversized * other.fitted_oversized
            + self.classic_experimental * other.classic_experimental
            + self.soft_edgy * other.soft_edgy
            + self.casual_glam * other.casual_glam
    }

    /// The dimensions in their canonical order.
    pub fn as_array(&self) -> [f32; STYLE_DIM] {
        [
            self.minimal_loud,
            self.fitted_oversized,
            self.classic_experimental,
            self.soft_edgy,
            self.casual_glam,
        ]
    }

    /// Clamps every dimension to [-1, 1].
    pub fn clamped(&self) -> StyleVector {
        StyleVector {
            minimal_loud: self.minimal_loud.clamp(-1.0, 1.0),
            fitted_oversized: self.fitted_oversized.clamp(-1.0, 1.0),
            classic_experimental: self.classic_experimental.clamp(-1.0, 1.0),
            soft_edgy: self.soft_edgy.clamp(-1.0, 1.0),
            casual_glam: self.casual_glam.clamp(-1.0, 1.0),
        }
    }

    pub fn scaled(&self, factor: f32) -> StyleVector {
        StyleVector {
            minimal_loud: self.minimal_loud * factor,
            fitted_oversized: self.fitted_oversized * factor,
            classic_experimental: self.classic_experimental * factor,
            soft_edgy: self.soft_edgy * factor,
            casual_glam: self.casual_glam * factor,
        }
    }

    pub fn added(&self, other: &StyleVector) -> StyleVector {
        StyleVector {
            minimal_loud: self.minimal_loud + other.minimal_loud,
            fitted_oversized: self.fitted_oversized + other.fitted_oversized,
            classic_experimental: self.classic_experimental + other.classic_experimental,
            soft_edgy: self.soft_edgy + other.soft_edgy,
            casual_glam: self.casual_glam + other.casual_glam,
        }
    }
}

/// Combines a base vector with a signal vector using the given weights,
/// clamping the result per dimension to [-1, 1].
pub fn blend(base: &StyleVector, signal: &StyleVector, weights: (f32, f32)) -> StyleVector {
    let (w_base, w_signal) = weights;
    base.scaled(w_base).added(&signal.scaled(w_signal)).clamped()
}
